// SPDX-License-Identifier: MIT OR Apache-2.0

//! Copy for the wealth-advisory pages. This site ships in English only; the
//! audience is people who have not moved yet.

pub struct StepCopy {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HERO_TITLE: &str = "Keep more of what you earn in Portugal";
pub const HERO_LEAD: &str = "Atlantica Wealth plans your relocation end to end: residency, \
     the flat-rate tax regime, property, and banking.";
pub const HERO_CTA: &str = "Book a consultation";

pub const ESTIMATOR_TITLE: &str = "What would you save?";
pub const ESTIMATOR_LEAD: &str = "Compare your current tax burden with Portugal's flat-rate \
     residency regime. Indicative only; your advisor runs the real numbers.";

pub const STEPS_TITLE: &str = "How an engagement runs";
pub const STEPS: &[StepCopy] = &[
    StepCopy {
        title: "Assess",
        body: "One call to map your income, assets, and timeline against the \
               regime's requirements.",
    },
    StepCopy {
        title: "Structure",
        body: "A written relocation plan covering residency route, tax \
               registration, and what to move when.",
    },
    StepCopy {
        title: "Execute",
        body: "We file, register, and introduce you to banks and property \
               partners on the ground.",
    },
];

pub const BOOKING_TITLE: &str = "Talk it through first";
pub const BOOKING_LEAD: &str = "Thirty minutes with an advisor, no commitment.";
