// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bilingual copy for the institutional pages.
//!
//! One dictionary, keyed by [`Locale`], matched exhaustively. Pages never
//! re-declare strings; they pull the subtree for the active locale.

use atlantica_types::Locale;

pub struct SiteCopy {
    pub nav_services: &'static str,
    pub nav_approach: &'static str,
    pub nav_contact: &'static str,

    pub hero_title: &'static str,
    pub hero_lead: &'static str,
    pub hero_cta: &'static str,

    pub services_title: &'static str,
    pub services: &'static [ServiceCopy],

    pub approach_title: &'static str,
    pub approach_paragraphs: &'static [&'static str],

    pub contact_title: &'static str,
    pub contact_lead: &'static str,
    pub contact_cta: &'static str,

    pub footer_tagline: &'static str,
    pub footer_group_title: &'static str,
    pub footer_legal_title: &'static str,
    pub footer_privacy: &'static str,

    pub privacy_title: &'static str,
    pub privacy_paragraphs: &'static [&'static str],

    pub consent_message: &'static str,
    pub consent_accept: &'static str,
}

pub struct ServiceCopy {
    pub title: &'static str,
    pub body: &'static str,
    pub href: &'static str,
}

pub fn copy(locale: Locale) -> &'static SiteCopy {
    match locale {
        Locale::En => &EN,
        Locale::Pt => &PT,
    }
}

static EN: SiteCopy = SiteCopy {
    nav_services: "Services",
    nav_approach: "Our approach",
    nav_contact: "Contact",

    hero_title: "Advisory that crosses the Atlantic with you",
    hero_lead: "Atlantica helps companies and families plan funding, wealth, \
                and public incentives in Portugal, in one place.",
    hero_cta: "Talk to an advisor",

    services_title: "What we do",
    services: &[
        ServiceCopy {
            title: "Business funding",
            body: "Debt and equity readiness, bank negotiation, and application \
                   support for growing companies.",
            href: "https://funding.atlantica.pt",
        },
        ServiceCopy {
            title: "Wealth advisory",
            body: "Relocation and residency planning for professionals and \
                   families moving to Portugal.",
            href: "https://wealth.atlantica.pt",
        },
        ServiceCopy {
            title: "Grants and incentives",
            body: "Mapping, drafting, and managing applications to national and \
                   European incentive programmes.",
            href: "https://grants.atlantica.pt",
        },
    ],

    approach_title: "Our approach",
    approach_paragraphs: &[
        "We are one team across three practices. The advisor who answers your \
         first call stays with you through execution.",
        "Every engagement starts with a written plan: what we will do, what it \
         costs, and when you will see results.",
        "We only take engagements we expect to win. When a programme or a \
         structure is not a fit, we say so in the first meeting.",
    ],

    contact_title: "Start the conversation",
    contact_lead: "Offices in Lisbon and Porto. We answer within one business day.",
    contact_cta: "Write to us",

    footer_tagline: "Advisory across funding, wealth, and incentives.",
    footer_group_title: "Group",
    footer_legal_title: "Legal",
    footer_privacy: "Privacy",

    privacy_title: "Privacy notice",
    privacy_paragraphs: &[
        "This site keeps no visitor accounts and stores a single cookie-consent \
         flag in your browser.",
        "Form submissions are relayed to our mailbox and used only to answer \
         your enquiry.",
    ],

    consent_message: "We use cookies to understand how visitors use this site.",
    consent_accept: "Accept",
};

static PT: SiteCopy = SiteCopy {
    nav_services: "Serviços",
    nav_approach: "A nossa abordagem",
    nav_contact: "Contactos",

    hero_title: "Consultoria que atravessa o Atlântico consigo",
    hero_lead: "A Atlantica ajuda empresas e famílias a planear financiamento, \
                património e incentivos públicos em Portugal, num só lugar.",
    hero_cta: "Fale com um consultor",

    services_title: "O que fazemos",
    services: &[
        ServiceCopy {
            title: "Financiamento empresarial",
            body: "Preparação para dívida e capital, negociação bancária e apoio \
                   a candidaturas para empresas em crescimento.",
            href: "https://funding.atlantica.pt",
        },
        ServiceCopy {
            title: "Gestão de património",
            body: "Planeamento de relocalização e residência para profissionais \
                   e famílias que se mudam para Portugal.",
            href: "https://wealth.atlantica.pt",
        },
        ServiceCopy {
            title: "Subsídios e incentivos",
            body: "Identificação, redação e gestão de candidaturas a programas \
                   de incentivo nacionais e europeus.",
            href: "https://grants.atlantica.pt",
        },
    ],

    approach_title: "A nossa abordagem",
    approach_paragraphs: &[
        "Somos uma equipa única em três práticas. O consultor que atende a sua \
         primeira chamada acompanha-o até à execução.",
        "Cada projeto começa com um plano escrito: o que vamos fazer, quanto \
         custa e quando verá resultados.",
        "Só aceitamos projetos que esperamos ganhar. Quando um programa ou uma \
         estrutura não se adequa, dizemo-lo na primeira reunião.",
    ],

    contact_title: "Comece a conversa",
    contact_lead: "Escritórios em Lisboa e no Porto. Respondemos num dia útil.",
    contact_cta: "Escreva-nos",

    footer_tagline: "Consultoria em financiamento, património e incentivos.",
    footer_group_title: "Grupo",
    footer_legal_title: "Legal",
    footer_privacy: "Privacidade",

    privacy_title: "Política de privacidade",
    privacy_paragraphs: &[
        "Este site não mantém contas de visitantes e guarda apenas um sinal de \
         consentimento de cookies no seu navegador.",
        "As mensagens dos formulários são reencaminhadas para a nossa caixa de \
         correio e usadas apenas para responder ao seu pedido.",
    ],

    consent_message: "Usamos cookies para perceber como os visitantes usam este site.",
    consent_accept: "Aceitar",
};
