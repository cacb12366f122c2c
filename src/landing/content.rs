//! Static copy of the landing page sections.

use chrono::Datelike;

pub const PRODUCT_NAME: &str = "BlitzCoder";

/// Top navigation entries (label, anchor).
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Features", "#features"),
    ("Pricing", "#pricing"),
    ("Documentation", "#docs"),
    ("About", "#about"),
    ("Blog", "#blog"),
];

pub struct Hero {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub stats: &'static [(&'static str, &'static str)],
    pub trusted_by: &'static [&'static str],
}

pub const HERO: Hero = Hero {
    headline: "Build Production-Ready Code at Terminal Speed",
    tagline: "AI-powered CLI tool that scaffolds, generates, and optimizes your code projects in seconds. From idea to deployment, faster than ever.",
    primary_cta: "Start Building Now",
    secondary_cta: "Watch Demo",
    stats: &[("10,000+", "developers"), ("4.9/5", "rating"), ("2.3k", "stars")],
    trusted_by: &["GitHub", "Vercel", "Netlify", "Supabase", "Railway"],
};

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Intelligent Project Scaffolding",
        description: "Generate complete project structures with industry best practices and proper architecture patterns.",
    },
    Feature {
        title: "AI-Powered Code Generation",
        description: "Production-ready code with proper error handling, documentation, and security implementations.",
    },
    Feature {
        title: "Multi-Framework Support",
        description: "Support for FastAPI, Node.js, React, Django, Flask, Express.js and more frameworks.",
    },
    Feature {
        title: "Real-Time Error Detection",
        description: "Intelligent debugging and automatic code fixes with advanced static analysis.",
    },
    Feature {
        title: "Terminal-Native Experience",
        description: "Seamless CLI integration that fits perfectly into your existing development workflow.",
    },
    Feature {
        title: "Enterprise-Grade Security",
        description: "Secure code generation with privacy-first approach and industry-standard security practices.",
    },
];

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub command: &'static str,
    pub details: &'static [&'static str],
}

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Install & Configure",
        description: "Quick installation with npm and seamless setup in your terminal environment.",
        command: "npm install -g blitzcoder",
        details: &[
            "Cross-platform support",
            "Zero configuration needed",
            "Integrates with existing tools",
        ],
    },
    Step {
        number: "02",
        title: "Describe Your Project",
        description: "Simply tell BlitzCoder what you want to build using natural language commands.",
        command: "blitz create ecommerce-api --framework fastapi",
        details: &[
            "Natural language interface",
            "Framework-specific templates",
            "Intelligent project analysis",
        ],
    },
    Step {
        number: "03",
        title: "Build & Deploy",
        description: "Get complete, production-ready code with tests, documentation, and deployment configs.",
        command: "✨ Complete project ready in 3.2 seconds",
        details: &[
            "Production-ready code",
            "Comprehensive testing",
            "Deployment configurations",
        ],
    },
];

/// A pricing tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub cta: &'static str,
}

/// Plan that routes to sales instead of the sign-up modal.
pub const ENTERPRISE_PLAN: &str = "Enterprise";

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Developer",
        price: "$0",
        period: "/month",
        description: "Perfect for individual developers and personal projects",
        popular: false,
        features: &[
            "10 projects per month",
            "Basic code generation",
            "Community support",
            "Standard frameworks (FastAPI, Node.js, React)",
            "Basic error detection",
            "Terminal CLI access",
            "Public GitHub integration",
        ],
        limitations: &[
            "Limited to 10 projects/month",
            "Community support only",
            "Basic templates only",
        ],
        cta: "Start Free",
    },
    Plan {
        name: "Professional",
        price: "$19",
        period: "/month",
        description: "Ideal for professional developers and small teams",
        popular: true,
        features: &[
            "Unlimited projects",
            "Advanced AI models (GPT-4, Groq, Gemini)",
            "Priority support (24h response)",
            "Custom templates & scaffolding",
            "Team collaboration (up to 5 members)",
            "Advanced debugging & refactoring",
            "Private repository support",
            "Performance optimization",
            "Code review automation",
            "Custom framework support",
        ],
        limitations: &[],
        cta: "Start Pro Trial",
    },
    Plan {
        name: ENTERPRISE_PLAN,
        price: "Custom",
        period: "",
        description: "For large teams and organizations with advanced needs",
        popular: false,
        features: &[
            "Everything in Professional",
            "Custom AI model training",
            "SLA guarantee (99.9% uptime)",
            "Dedicated support & success manager",
            "On-premise deployment options",
            "Advanced security & compliance",
            "Custom integrations & APIs",
            "Unlimited team members",
            "Advanced analytics & reporting",
            "Custom training & onboarding",
        ],
        limitations: &[],
        cta: "Contact Sales",
    },
];

/// Look up a plan by its display name.
pub fn plan(name: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.name == name)
}

/// Footer link columns (heading, labels).
pub const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    (
        "Product",
        &["Features", "Pricing", "Documentation", "API Reference", "Changelog"],
    ),
    ("Company", &["About", "Blog", "Careers", "Press", "Contact"]),
    (
        "Support",
        &["Help Center", "Community", "Discord", "GitHub Issues", "Status"],
    ),
    (
        "Legal",
        &["Privacy Policy", "Terms of Service", "Security", "Compliance"],
    ),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/blitzcoder"),
    ("Twitter", "https://twitter.com/blitzcoder"),
    ("LinkedIn", "https://linkedin.com/company/blitzcoder"),
    ("Email", "mailto:hello@blitzcoder.com"),
];

/// Copyright line for the given year.
pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, PRODUCT_NAME)
}

/// Copyright line for the current year.
pub fn copyright_now() -> String {
    copyright(chrono::Local::now().year())
}
