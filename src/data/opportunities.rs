use crate::domain::Opportunity;

pub const OPPORTUNITIES: [Opportunity; 6] = [
    Opportunity {
        title: "AI Image Generation Services",
        category: "AI Services",
        trend: "🔥 Hot",
        potential: "$500-3000/month",
        difficulty: "Easy",
        description: "Create custom images for businesses using AI tools like Midjourney and DALL-E",
        demand: "High",
        competition: "Medium",
        time_to_start: "1-2 weeks",
    },
    Opportunity {
        title: "ChatGPT Prompt Engineering",
        category: "Consulting",
        trend: "📈 Rising",
        potential: "$1000-5000/month",
        difficulty: "Medium",
        description: "Help businesses optimize their AI prompts for better results",
        demand: "Very High",
        competition: "Low",
        time_to_start: "1 week",
    },
    Opportunity {
        title: "AI-Powered Social Media Management",
        category: "Marketing",
        trend: "⚡ Trending",
        potential: "$800-4000/month",
        difficulty: "Medium",
        description: "Manage social media accounts using AI tools for content creation and scheduling",
        demand: "High",
        competition: "Medium",
        time_to_start: "2-3 weeks",
    },
    Opportunity {
        title: "AI Content Localization",
        category: "Translation",
        trend: "🚀 Emerging",
        potential: "$600-2500/month",
        difficulty: "Easy-Medium",
        description: "Help businesses translate and localize content using AI translation tools",
        demand: "Growing",
        competition: "Low",
        time_to_start: "1-2 weeks",
    },
    Opportunity {
        title: "AI-Enhanced Online Tutoring",
        category: "Education",
        trend: "📚 Stable",
        potential: "$400-2000/month",
        difficulty: "Easy",
        description: "Offer tutoring services enhanced with AI tools for personalized learning",
        demand: "High",
        competition: "High",
        time_to_start: "1 week",
    },
    Opportunity {
        title: "AI Data Analysis Services",
        category: "Analytics",
        trend: "📊 Growing",
        potential: "$1200-6000/month",
        difficulty: "Hard",
        description: "Provide data analysis and insights using AI-powered analytics tools",
        demand: "Very High",
        competition: "Low",
        time_to_start: "3-4 weeks",
    },
];
