//! Landing page content.

use crate::domain::{Feature, Section, Stat, Testimonial};

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "✨",
        title: "AI Strategy Generator",
        description: "Get personalized money-making strategies powered by artificial intelligence",
        target: Section::Generator,
        color: "purple",
    },
    Feature {
        icon: "📈",
        title: "Opportunity Scanner",
        description: "Discover trending AI-powered business opportunities in real-time",
        target: Section::Scanner,
        color: "blue",
    },
    Feature {
        icon: "💲",
        title: "Income Calculator",
        description: "Calculate your potential earnings from various AI services",
        target: Section::Calculator,
        color: "green",
    },
    Feature {
        icon: "⚡",
        title: "Resource Library",
        description: "Access curated guides, tools, and templates for AI entrepreneurs",
        target: Section::Resources,
        color: "indigo",
    },
];

pub const STATS: [Stat; 4] = [
    Stat {
        icon: "📈",
        label: "AI Opportunities",
        value: "500+",
    },
    Stat {
        icon: "⭐",
        label: "Success Stories",
        value: "1,200+",
    },
    Stat {
        icon: "💲",
        label: "Avg. Monthly Income",
        value: "$3,500",
    },
    Stat {
        icon: "⚡",
        label: "Time to Start",
        value: "1-2 weeks",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah M.",
        role: "AI Content Creator",
        income: "$4,200/month",
        quote: "Started with zero AI knowledge",
    },
    Testimonial {
        name: "Mike R.",
        role: "AI Chatbot Developer",
        income: "$7,800/month",
        quote: "Quit my day job in 3 months",
    },
    Testimonial {
        name: "Lisa K.",
        role: "AI Consultant",
        income: "$12,500/month",
        quote: "Working 20 hours/week",
    },
];
