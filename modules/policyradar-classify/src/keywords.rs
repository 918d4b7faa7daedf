//! Keyword tables for the relevance engine. All matching is lowercase
//! substring containment over title ∥ summary ∥ content.

/// Signals that the item concerns India.
pub const INDIA_KEYWORDS: &[&str] = &[
    "india",
    "indian",
    "bharat",
    "new delhi",
    "delhi",
    "mumbai",
    "bengaluru",
    "chennai",
    "kolkata",
    "hyderabad",
    "lok sabha",
    "rajya sabha",
    "union cabinet",
    "union government",
    "union budget",
    "union minister",
    "niti aayog",
    "rbi",
    "reserve bank",
    "sebi",
    "trai",
    "supreme court of india",
    "centre-state",
    "panchayat",
    "crore",
    "lakh",
    "rupee",
    "gst",
    "aadhaar",
    "pib",
    "press information bureau",
];

/// Signals that the item concerns a foreign polity.
pub const FOREIGN_KEYWORDS: &[&str] = &[
    "u.s.",
    "united states",
    "american",
    "washington",
    "white house",
    "senate",
    "capitol hill",
    "federal reserve",
    "united kingdom",
    "britain",
    "downing street",
    "european union",
    "brussels",
    "eurozone",
    "beijing",
    "communist party of china",
    "kremlin",
    "moscow",
    "tokyo",
    "canberra",
    "ottawa",
    "berlin",
    "paris",
];

/// Disambiguators for "congress": the word alone usually means the Indian
/// National Congress; with these present and no India signal it means the US
/// legislature.
pub const US_CONGRESS_CONTEXT: &[&str] = &["u.s.", "american", "washington"];

/// Exact phrases that mark organizational boilerplate on government sites.
pub const ORGANIZATIONAL_PHRASES: &[&str] = &[
    "about us",
    "contact us",
    "who we are",
    "our team",
    "careers",
    "privacy policy",
    "terms of service",
    "disclaimer",
    "sitemap",
    "copyright",
    "accessibility",
];

/// Indicators that rescue a title from the organizational filter.
pub const POLICY_INDICATORS: &[&str] = &[
    "policy",
    "notification",
    "circular",
    "guideline",
    "regulation",
    "act",
    "bill",
    "amendment",
    "order",
    "rule",
    "scheme",
    "announcement",
    "decision",
    "approval",
    "implementation",
];

/// Two or more hits mark a high-impact government item.
pub const HIGH_IMPACT_KEYWORDS: &[&str] = &[
    "cabinet",
    "parliament",
    "bill passed",
    "ordinance",
    "supreme court",
    "constitutional",
    "mandatory",
    "compliance",
    "nationwide",
    "tax rate",
    "interest rate",
    "subsidy",
    "welfare",
    "regulatory change",
    "new rules",
    "deadline",
    "penalty",
];

/// Keywords that lift the policy-relevance score.
pub const HIGH_RELEVANCE_KEYWORDS: &[&str] = &[
    "policy",
    "regulation",
    "bill",
    "act",
    "law",
    "ministry",
    "government",
    "notification",
    "amendment",
    "cabinet",
    "parliament",
    "supreme court",
    "legislation",
    "regulatory",
    "compliance",
    "niti aayog",
    "rbi",
    "sebi",
    "trai",
    "circular",
    "ordinance",
    "statute",
    "directive",
    "mandate",
];

pub const MEDIUM_RELEVANCE_KEYWORDS: &[&str] = &[
    "reform",
    "initiative",
    "program",
    "scheme",
    "mission",
    "project",
    "framework",
    "strategy",
    "roadmap",
    "guideline",
    "committee",
    "commission",
    "panel",
    "task force",
    "authority",
    "board",
    "council",
    "fund",
    "subsidy",
    "tax",
    "budget",
    "fiscal",
    "monetary",
    "development",
    "governance",
];

/// One weighted exclusion category: noise that looks like news.
pub struct ExclusionCategory {
    pub name: &'static str,
    pub weight: f64,
    pub keywords: &'static [&'static str],
}

pub const EXCLUSION_CATEGORIES: &[ExclusionCategory] = &[
    ExclusionCategory {
        name: "organizational_content",
        weight: 2.0,
        keywords: &[
            "about us", "contact us", "our team", "careers", "sitemap", "privacy policy",
            "terms of service", "grievance officer", "annual report archive",
        ],
    },
    ExclusionCategory {
        name: "celebrity_entertainment",
        weight: 4.0,
        keywords: &[
            "bollywood", "box office", "film review", "movie review", "celebrity", "actor",
            "actress", "trailer", "web series", "red carpet", "paparazzi", "gossip",
        ],
    },
    ExclusionCategory {
        name: "sports_content",
        weight: 3.5,
        keywords: &[
            "cricket", "ipl", "world cup", "olympics", "football", "hockey", "tennis",
            "badminton", "tournament", "match report", "wicket", "innings",
        ],
    },
    ExclusionCategory {
        name: "educational_commercial",
        weight: 3.0,
        keywords: &[
            "admit card", "exam date", "result declared", "answer key", "cutoff", "admission open",
            "coaching", "mock test", "syllabus download",
        ],
    },
    ExclusionCategory {
        name: "product_launches",
        weight: 2.0,
        keywords: &[
            "launched in india", "price in india", "first look", "unboxing", "specs",
            "specifications", "flagship phone", "sale starts",
        ],
    },
    ExclusionCategory {
        name: "commercial_content",
        weight: 1.5,
        keywords: &[
            "discount", "offer", "deal", "cashback", "coupon", "sale", "festive offer",
            "limited time",
        ],
    },
    ExclusionCategory {
        name: "technology_consumer",
        weight: 1.0,
        keywords: &[
            "smartphone", "gadget", "laptop review", "earbuds", "smartwatch", "gaming console",
            "app update",
        ],
    },
    ExclusionCategory {
        name: "social_media_features",
        weight: 1.5,
        keywords: &[
            "viral video", "trending on", "memes", "influencer", "followers", "instagram reel",
        ],
    },
    ExclusionCategory {
        name: "literature_culture",
        weight: 1.0,
        keywords: &[
            "book review", "festival of arts", "exhibition", "concert", "theatre review",
            "poetry",
        ],
    },
];

/// Strong policy-context indicators; presence bumps the non-government seed
/// score and feeds the protection tiers.
pub const CONTEXT_INDICATORS: &[&str] = &[
    "ministry",
    "government",
    "parliament",
    "cabinet",
    "regulator",
    "regulatory",
    "legislation",
    "governance",
    "public policy",
    "statutory",
    "tribunal",
    "constitution",
];

/// Words that rescue otherwise-excluded items (a cricket story about a GST
/// ruling on match tickets is still policy news).
pub const EXCEPTION_KEYWORDS: &[&str] = &[
    "policy",
    "regulation",
    "ban",
    "court order",
    "government order",
    "taxation",
    "gst",
    "antitrust",
    "data protection",
    "censorship",
];

pub const VALIDATION_KEYWORDS: &[&str] = &[
    "notification",
    "circular",
    "gazette",
    "ordinance",
    "amendment",
    "directive",
    "compliance",
    "enforcement",
];

pub const BUSINESS_POLICY_KEYWORDS: &[&str] = &[
    "merger approval",
    "fdi",
    "foreign direct investment",
    "disinvestment",
    "psu",
    "tariff",
    "customs duty",
    "export policy",
    "import policy",
    "licence",
    "license regime",
    "competition commission",
];

pub const DEFENCE_INDICATORS: &[&str] = &[
    "defence ministry",
    "ministry of defence",
    "armed forces",
    "drdo",
    "border security",
    "ceasefire",
    "loc",
    "line of control",
    "indo-pak",
    "india-pakistan",
    "military exercise",
    "procurement of",
];

/// Sector scoring is zero unless one of these appears.
pub const CORE_POLICY_TRIGGERS: &[&str] = &[
    "policy",
    "regulation",
    "bill",
    "act",
    "law",
    "ministry",
    "government",
    "notification",
    "amendment",
    "cabinet",
    "parliament",
    "court",
    "scheme",
    "rules",
    "governance",
    "regulator",
];

pub struct Sector {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

#[rustfmt::skip]
pub const SECTORS: &[Sector] = &[
    Sector { name: "Technology Policy", keywords: &[
        "technology", "digital", "telecom", "telecommunications", "data protection", "data",
        "privacy", "cyber", "cybersecurity", "internet", "e-commerce", "ecommerce",
        "social media", "artificial intelligence", "machine learning", "semiconductor",
        "blockchain", "crypto", "cryptocurrency", "fintech", "startup", "innovation", "spectrum",
    ]},
    Sector { name: "Economic Policy", keywords: &[
        "economy", "economic", "finance", "financial", "banking", "investment",
        "trade", "commerce", "business", "industry", "industrial", "manufacturing",
        "msme", "gdp", "inflation", "fiscal", "monetary", "budget", "tax", "taxation",
        "subsidy", "export", "import", "customs", "tariff", "market", "disinvestment",
    ]},
    Sector { name: "Healthcare Policy", keywords: &[
        "health", "healthcare", "medical", "medicine", "hospital", "doctor", "patient",
        "disease", "vaccination", "vaccine", "pandemic", "epidemic", "pharma",
        "pharmaceutical", "insurance", "ayushman", "drug", "ayush", "wellness", "nutrition",
    ]},
    Sector { name: "Environmental Policy", keywords: &[
        "environment", "environmental", "pollution", "sustainable", "sustainability",
        "green", "emission", "forest", "wildlife", "biodiversity", "water",
        "waste", "ecology", "ecological", "air quality", "plastic",
    ]},
    Sector { name: "Climate Policy", keywords: &[
        "climate", "climate change", "net zero", "carbon", "cop summit", "mitigation",
        "adaptation", "global warming", "emission target", "carbon credit", "carbon market",
    ]},
    Sector { name: "Renewable Energy Policy", keywords: &[
        "renewable", "solar", "wind energy", "clean energy", "green hydrogen", "energy storage",
        "power grid", "electricity", "tariff order", "discom", "net metering", "rooftop solar",
    ]},
    Sector { name: "Conservation Policy", keywords: &[
        "conservation", "national park", "sanctuary", "tiger reserve", "wetland", "mangrove",
        "river", "groundwater", "watershed", "afforestation", "eco-sensitive",
    ]},
    Sector { name: "Education Policy", keywords: &[
        "education", "educational", "school", "college", "university", "academic",
        "student", "teacher", "curriculum", "nep", "skill", "scholarship", "ugc",
        "aicte", "literacy", "enrolment",
    ]},
    Sector { name: "Agricultural Policy", keywords: &[
        "agriculture", "agricultural", "farmer", "farming", "crop", "msp",
        "rural", "irrigation", "fertilizer", "pesticide", "seed", "food security",
        "fci", "procurement", "horticulture", "livestock", "dairy",
    ]},
    Sector { name: "Foreign Policy", keywords: &[
        "foreign", "diplomatic", "diplomacy", "bilateral", "multilateral",
        "treaty", "pact", "agreement", "embassy", "ambassador", "visa",
        "united nations", "g20", "brics", "summit", "strategic partnership",
    ]},
    Sector { name: "Constitutional & Legal", keywords: &[
        "constitution", "constitutional", "judiciary", "judicial", "court",
        "supreme court", "high court", "judge", "justice", "legal", "law",
        "verdict", "judgment", "statute", "writ", "petition", "bench", "tribunal",
    ]},
    Sector { name: "Defence & Security", keywords: &[
        "defence", "defense", "security", "military", "army", "navy", "air force",
        "strategic", "weapon", "terrorism", "intelligence", "border",
        "nuclear", "missile", "war", "conflict", "ceasefire", "procurement",
    ]},
    Sector { name: "Social Policy", keywords: &[
        "social", "welfare", "poverty", "employment", "unemployment",
        "labour", "labor", "worker", "pension", "gender", "women",
        "child", "minority", "disability", "housing", "urban", "migrant",
    ]},
    Sector { name: "Governance & Administration", keywords: &[
        "governance", "administration", "bureaucracy", "civil service",
        "transparency", "accountability", "corruption", "electoral", "election",
        "e-governance", "municipal", "panchayat", "federalism", "centre-state",
    ]},
];

/// Defence-specific tokens that trigger the 1.5× sector multiplier.
pub const DEFENCE_SECTOR_BOOST_TOKENS: &[&str] =
    &["indo-pak", "india-pakistan", "loc", "line of control", "drdo", "ceasefire", "air strike"];

/// Generic categories eligible for sector reassignment.
pub const GENERIC_CATEGORIES: &[&str] = &["Policy News", "General News", "Policy Analysis"];
