// SPDX-License-Identifier: MIT OR Apache-2.0

//! Copy and plan data for the grants-advisory pages.

pub struct ProgrammeCopy {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct PlanCopy {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    pub button_label: &'static str,
}

pub const HERO_TITLE: &str = "Public money your competitors already use";
pub const HERO_LEAD: &str = "Atlantica Grants finds the incentive programmes your company \
     qualifies for, writes the applications, and manages them to payout.";
pub const HERO_CTA: &str = "Check your eligibility";

pub const PROGRAMMES_TITLE: &str = "Programme areas we cover";
pub const PROGRAMMES: &[ProgrammeCopy] = &[
    ProgrammeCopy {
        title: "Innovation and R&D",
        body: "Product development, applied research partnerships, and \
               innovation vouchers.",
    },
    ProgrammeCopy {
        title: "Internationalisation",
        body: "Export readiness, trade-fair presence, and market-entry \
               support lines.",
    },
    ProgrammeCopy {
        title: "Green transition",
        body: "Energy efficiency, decarbonisation, and circular-economy \
               investment support.",
    },
    ProgrammeCopy {
        title: "Digital transition",
        body: "Process digitalisation, e-commerce, and workforce digital \
               skills programmes.",
    },
];

pub const PRICING_TITLE: &str = "How we charge";
pub const PRICING_LEAD: &str = "A small retainer keeps the pipeline warm; the success fee only \
     exists when the grant is approved.";
pub const PLANS: &[PlanCopy] = &[
    PlanCopy {
        name: "Scan",
        price: "450",
        period: "one-off",
        description: "Eligibility scan across open and announced programmes",
        features: &[
            "Company profile review",
            "Programme shortlist",
            "Indicative funding range",
        ],
        highlighted: false,
        button_label: "Order a scan",
    },
    PlanCopy {
        name: "Application",
        price: "1,200",
        period: "application",
        description: "Full drafting and submission of one application",
        features: &[
            "Everything in Scan",
            "Technical and financial drafting",
            "Submission and clarifications",
            "Success fee on approval only",
        ],
        highlighted: true,
        button_label: "Apply with us",
    },
    PlanCopy {
        name: "Portfolio",
        price: "2,600",
        period: "month",
        description: "Continuous pipeline management for grant-heavy companies",
        features: &[
            "Everything in Application",
            "Execution and payout reporting",
            "Audit-ready documentation",
            "Dedicated advisor",
        ],
        highlighted: false,
        button_label: "Build a portfolio",
    },
];

pub const NEWSLETTER_TITLE: &str = "Programme calendar";
pub const NEWSLETTER_LEAD: &str = "Openings and deadlines for your sector, one email a month.";
