use crate::models::portfolio::{About, Hero, NavItem, PortfolioContent, Project, Skill, SocialLink};

impl Default for PortfolioContent {
    fn default() -> Self {
        PortfolioContent {
            hero: Hero {
                name: "Saym Islam Jihad",
                headline: "Full Stack Developer",
                tagline: "Crafting exceptional digital experiences with cutting-edge technologies \
                          and innovative solutions that bring ideas to life.",
            },
            about: About {
                bio: "I'm a passionate full-stack developer with a love for creating \
                      exceptional digital experiences. With expertise in modern web technologies, \
                      I transform ideas into powerful, scalable applications that make a difference.",
                resume_url: "/resume.pdf",
                frontend: vec![
                    skill("React", "UI wizardry with React", "from-blue-400 to-blue-600"),
                    skill("Next.js", "Pages load like lightning", "from-gray-600 to-gray-800"),
                    skill("TypeScript", "I type safe!", "from-blue-500 to-blue-700"),
                ],
                backend: vec![
                    skill("Node.js", "Backend ninja stuff", "from-green-400 to-green-600"),
                    skill("Express", "Fast, unopinionated, minimalist!", "from-gray-500 to-gray-700"),
                    skill("Python", "For AI, APIs, and all things cool", "from-yellow-400 to-yellow-600"),
                    skill("MongoDB", "NoSQL, no problem!", "from-green-500 to-green-700"),
                    skill("Docker", "Packed and shipped perfectly", "from-blue-400 to-cyan-500"),
                ],
            },
            projects: vec![
                Project {
                    id: 1,
                    title: "E-Commerce Platform",
                    description: "A full-featured e-commerce platform with React, Node.js, and Stripe integration.",
                    long_description: "A comprehensive e-commerce solution featuring user authentication, \
                        product management, shopping cart functionality, payment processing with Stripe, \
                        order tracking, and admin dashboard. Built with modern React patterns and Node.js backend.",
                    tech: vec!["React", "Node.js", "MongoDB", "Stripe"],
                    icon: "shopping-cart",
                    gradient: "from-purple-500 to-pink-500",
                    github: "https://github.com",
                    demo: "https://demo.com",
                },
                Project {
                    id: 2,
                    title: "Task Management App",
                    description: "A collaborative task management application with real-time updates.",
                    long_description: "A powerful task management application with real-time collaboration \
                        features, drag-and-drop functionality, team workspaces, deadline tracking, and progress \
                        analytics. Features WebSocket integration for live updates.",
                    tech: vec!["Next.js", "Socket.io", "PostgreSQL", "Prisma"],
                    icon: "zap",
                    gradient: "from-cyan-500 to-blue-500",
                    github: "https://github.com",
                    demo: "https://demo.com",
                },
                Project {
                    id: 3,
                    title: "Design Portfolio",
                    description: "A stunning portfolio website for creative professionals.",
                    long_description: "An elegant portfolio website showcasing creative work with smooth \
                        animations, responsive design, and content management system. Features lazy loading, \
                        SEO optimization, and contact form integration.",
                    tech: vec!["Vue.js", "Nuxt.js", "Tailwind CSS", "Strapi"],
                    icon: "palette",
                    gradient: "from-emerald-500 to-green-500",
                    github: "https://github.com",
                    demo: "https://demo.com",
                },
                Project {
                    id: 4,
                    title: "Chat Application",
                    description: "Real-time messaging app with group chats and file sharing.",
                    long_description: "A modern chat application with real-time messaging, group conversations, \
                        file sharing, emoji reactions, and user presence indicators. Built with WebSocket \
                        technology for instant communication.",
                    tech: vec!["React", "Express", "Socket.io", "Redis"],
                    icon: "message-square",
                    gradient: "from-orange-500 to-red-500",
                    github: "https://github.com",
                    demo: "https://demo.com",
                },
                Project {
                    id: 5,
                    title: "Photo Gallery",
                    description: "Image gallery with advanced filtering and search capabilities.",
                    long_description: "A responsive photo gallery application with image upload, categorization, \
                        search functionality, and social sharing features. Includes image optimization and lazy \
                        loading for performance.",
                    tech: vec!["Angular", "Firebase", "TypeScript", "Cloudinary"],
                    icon: "camera",
                    gradient: "from-indigo-500 to-purple-500",
                    github: "https://github.com",
                    demo: "https://demo.com",
                },
                Project {
                    id: 6,
                    title: "Blog Platform",
                    description: "Modern blogging platform with CMS and SEO optimization.",
                    long_description: "A feature-rich blogging platform with content management system, SEO \
                        optimization, comment system, social sharing, and analytics dashboard. Supports markdown \
                        editing and media management.",
                    tech: vec!["Gatsby", "GraphQL", "Contentful", "Netlify"],
                    icon: "book-open",
                    gradient: "from-teal-500 to-cyan-500",
                    github: "https://github.com",
                    demo: "https://demo.com",
                },
            ],
            socials: vec![
                SocialLink::new("GitHub", "https://github.com/SaymIslamJihad297", "Check out my code", "github", "#6366f1", "#8b5cf6"),
                SocialLink::new("LinkedIn", "https://www.linkedin.com/in/saym-islam-70a10a306", "Let's connect professionally", "linkedin", "#0ea5e9", "#06b6d4"),
                SocialLink::new("Email", "mailto:info.jihadsheikh@gmail.com", "Drop me a line", "mail", "#10b981", "#059669"),
                SocialLink::new("Resume", "/resume.pdf", "Download my resume", "file-text", "#f59e0b", "#d97706"),
            ],
            nav: vec![
                NavItem { id: "hero", label: "Home" },
                NavItem { id: "about", label: "About" },
                NavItem { id: "github", label: "GitHub" },
                NavItem { id: "projects", label: "Projects" },
            ],
        }
    }
}

fn skill(name: &'static str, tooltip: &'static str, gradient: &'static str) -> Skill {
    Skill { name, tooltip, gradient }
}
