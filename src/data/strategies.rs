use crate::domain::Strategy;

pub const STRATEGIES: [Strategy; 3] = [
    Strategy {
        title: "AI Content Creation Business",
        description: "Leverage AI tools to create content for businesses and individuals",
        potential: "$2,000-$8,000/month",
        timeframe: "2-4 weeks to start",
        difficulty: "Medium",
        steps: &[
            "Learn AI content tools (ChatGPT, Claude, Jasper)",
            "Create portfolio samples",
            "Set up social media presence",
            "Find clients on Upwork, Fiverr",
            "Scale with automation",
        ],
        tags: &["AI", "Content", "Writing", "Marketing"],
    },
    Strategy {
        title: "AI-Powered Dropshipping",
        description: "Use AI to find winning products and automate your dropshipping business",
        potential: "$1,500-$10,000/month",
        timeframe: "3-6 weeks to start",
        difficulty: "Medium-High",
        steps: &[
            "Research trending products with AI tools",
            "Set up Shopify store",
            "Create AI-generated product descriptions",
            "Run targeted ads",
            "Automate customer service with chatbots",
        ],
        tags: &["E-commerce", "AI", "Automation", "Marketing"],
    },
    Strategy {
        title: "AI Tutoring & Course Creation",
        description: "Create and sell AI-enhanced educational content and tutoring services",
        potential: "$1,000-$5,000/month",
        timeframe: "2-3 weeks to start",
        difficulty: "Low-Medium",
        steps: &[
            "Choose your expertise area",
            "Create course outline with AI assistance",
            "Record video content",
            "Set up on Udemy/Teachable",
            "Market through social media",
        ],
        tags: &["Education", "AI", "Courses", "Teaching"],
    },
];
