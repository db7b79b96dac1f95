// SPDX-License-Identifier: MIT OR Apache-2.0

//! Copy and plan data for the funding-services pages.

pub struct ServiceCopy {
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

pub const HERO_TITLE: &str = "Funding for companies that outgrow their bank";
pub const HERO_LEAD: &str = "Atlantica Funding prepares your company for debt and equity, \
     negotiates terms, and stays until the money lands.";
pub const HERO_CTA: &str = "Book a call";

pub const SERVICES_TITLE: &str = "Where we help";
pub const SERVICES: &[ServiceCopy] = &[
    ServiceCopy {
        title: "Bank debt",
        body: "Restructure existing lines and negotiate new facilities with a \
               credible, lender-ready file.",
    },
    ServiceCopy {
        title: "Venture and growth equity",
        body: "Investor materials, data room, and introductions matched to \
               your stage and sector.",
    },
    ServiceCopy {
        title: "Mutual guarantee schemes",
        body: "Access guarantee-backed credit lines most companies never hear \
               about.",
    },
];

pub const PRICING_TITLE: &str = "Plans";
pub const PRICING_LEAD: &str = "Clear scope, fixed monthly fee, success component on funded amounts.";
pub const PLANS: &[PlanCopy] = &[
    PlanCopy {
        name: "Diagnostic",
        price: "900",
        period: "one-off",
        description: "Funding readiness review with a written action plan",
        features: &[
            "Financial file review",
            "Bankability score",
            "Instrument shortlist",
        ],
        highlighted: false,
        button_label: "Start with a diagnostic",
    },
    PlanCopy {
        name: "Raise",
        price: "1,900",
        period: "month",
        description: "End-to-end support through one funding round",
        features: &[
            "Everything in Diagnostic",
            "Lender and investor outreach",
            "Term negotiation at your side",
            "Close-out support",
        ],
        highlighted: true,
        button_label: "Raise with us",
    },
    PlanCopy {
        name: "Partner",
        price: "3,400",
        period: "month",
        description: "Standing finance partner for serial raisers",
        features: &[
            "Everything in Raise",
            "Quarterly capital strategy",
            "Board reporting pack",
            "Priority response",
        ],
        highlighted: false,
        button_label: "Talk to us",
    },
];

pub const NEWSLETTER_TITLE: &str = "Funding windows move fast";
pub const NEWSLETTER_LEAD: &str = "One email when a relevant credit line or programme opens. No noise.";
