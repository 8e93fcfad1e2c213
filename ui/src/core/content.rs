//! Static page content: the hero banner, the onboarding steps and the quote strip.
//!
//! Ordering is part of the content. Steps tell the onboarding story 1 → 4 and
//! the quotes scroll in the order they are listed here.

/// One card of the "How We Help Companies" sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// Hero banner shown at the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroBanner {
    pub title: &'static str,
    pub tagline: &'static str,
    pub background: &'static str,
}

pub const HERO: HeroBanner = HeroBanner {
    title: "Corporate Food Vendor Finder",
    tagline: "We help companies arrange daily meals by connecting them with trusted food vendors.",
    background: "https://images.unsplash.com/photo-1504754524776-8f4f37790ca0",
};

pub const STEPS: [Step; 4] = [
    Step {
        title: "Company Reaches Out",
        description: "Organizations contact us when they need daily meal arrangements for employees.",
        image: "https://images.unsplash.com/photo-1556740749-887f6717d7e4",
    },
    Step {
        title: "We Analyze Requirement",
        description: "We understand headcount, meal types, budget and delivery locations.",
        image: "https://images.unsplash.com/photo-1556761175-4b46a572b786",
    },
    Step {
        title: "Vendor Matching",
        description: "We find the best suitable food vendors from our network.",
        image: "https://images.unsplash.com/photo-1504674900247-0877df9cc836",
    },
    Step {
        title: "Meal Arrangement Setup",
        description: "We help finalize vendor and assist in starting daily meal supply.",
        image: "https://images.unsplash.com/photo-1498654896293-37aacf113fd9",
    },
];

pub const QUOTES: [&str; 4] = [
    "Good food keeps employees happy and productive.",
    "Healthy teams start with healthy meals.",
    "Great workplaces invest in great food.",
    "Daily meals made simple for companies.",
];

/// 1-based position label used on the step cards ("Step 1", "Step 2", ...).
pub fn step_number(index: usize) -> usize {
    index + 1
}
