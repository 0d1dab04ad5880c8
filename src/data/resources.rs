use crate::domain::{Resource, ResourceIcon};

pub const RESOURCES: [Resource; 6] = [
    Resource {
        title: "Complete Guide to AI Content Creation",
        kind: "Guide",
        category: "Content Creation",
        description: "Step-by-step guide to building a profitable AI content creation business",
        icon: ResourceIcon::FileText,
        difficulty: "Beginner",
        estimated_time: "30 min read",
        tags: &["AI", "Content", "Business"],
    },
    Resource {
        title: "AI Tools Masterclass",
        kind: "Video Course",
        category: "Education",
        description: "Learn to use ChatGPT, Claude, Midjourney, and other AI tools effectively",
        icon: ResourceIcon::Video,
        difficulty: "Intermediate",
        estimated_time: "2 hours",
        tags: &["AI Tools", "Training", "Hands-on"],
    },
    Resource {
        title: "Freelancing with AI Services",
        kind: "Template",
        category: "Business",
        description: "Ready-to-use templates for proposals, contracts, and pricing for AI services",
        icon: ResourceIcon::FileText,
        difficulty: "Beginner",
        estimated_time: "15 min setup",
        tags: &["Templates", "Freelancing", "Business"],
    },
    Resource {
        title: "AI Entrepreneurs Community",
        kind: "Community",
        category: "Networking",
        description: "Join thousands of entrepreneurs building AI-powered businesses",
        icon: ResourceIcon::Users,
        difficulty: "All Levels",
        estimated_time: "Ongoing",
        tags: &["Community", "Networking", "Support"],
    },
    Resource {
        title: "Prompt Engineering Secrets",
        kind: "Ebook",
        category: "Technical",
        description: "Advanced techniques for creating high-converting AI prompts",
        icon: ResourceIcon::Zap,
        difficulty: "Advanced",
        estimated_time: "1 hour read",
        tags: &["Prompts", "AI", "Advanced"],
    },
    Resource {
        title: "AI Business Case Studies",
        kind: "Case Study",
        category: "Inspiration",
        description: "Real success stories from AI entrepreneurs making $10k+/month",
        icon: ResourceIcon::BookOpen,
        difficulty: "All Levels",
        estimated_time: "45 min read",
        tags: &["Success Stories", "Inspiration", "Real Examples"],
    },
];
