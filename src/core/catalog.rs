//! The literal report tables
//!
//! Every value here is a constant. The statistics narration ("29 files")
//! disagrees with the sum of the file breakdown (30); both are kept as
//! written.

use crate::models::report::{Closing, FileCategory, Highlight, Report, Statistic};

pub const TITLE: &str = "📁 GITHUB REPOSITORY PREPARATION - COMPLETE!";

const FILES: [FileCategory; 7] = [
    FileCategory {
        description: "Core Project Files",
        count: 24,
        purpose: "Complete React application with all components",
    },
    FileCategory {
        description: "README.md",
        count: 1,
        purpose: "Comprehensive project documentation with features",
    },
    FileCategory {
        description: ".gitignore",
        count: 1,
        purpose: "Excludes node_modules, build files, IDE files",
    },
    FileCategory {
        description: "LICENSE",
        count: 1,
        purpose: "MIT license for open source distribution",
    },
    FileCategory {
        description: "CONTRIBUTING.md",
        count: 1,
        purpose: "Guidelines for contributors and developers",
    },
    FileCategory {
        description: ".github/workflows/ci-cd.yml",
        count: 1,
        purpose: "GitHub Actions for automated CI/CD",
    },
    FileCategory {
        description: "GITHUB_UPLOAD_GUIDE.md",
        count: 1,
        purpose: "Complete step-by-step upload instructions",
    },
];

const COMMANDS: [&str; 7] = [
    "cd hotel-billing-system",
    "git init",
    "git add .",
    "git commit -m \"🎉 Initial commit: Complete hotel billing system\"",
    "git remote add origin https://github.com/yourusername/hotel-billing-system.git",
    "git branch -M main",
    "git push -u origin main",
];

const FEATURES: [&str; 10] = [
    "✅ Professional README with badges and screenshots",
    "✅ Comprehensive documentation and installation guide",
    "✅ MIT License for commercial and personal use",
    "✅ Contribution guidelines for open source community",
    "✅ GitHub Actions CI/CD pipeline for automated testing",
    "✅ Proper .gitignore excluding unnecessary files",
    "✅ Issue templates for bug reports and features",
    "✅ Release management and version tagging ready",
    "✅ Community features (discussions, wiki, projects)",
    "✅ GitHub Pages deployment ready",
];

const HIGHLIGHTS: [Highlight; 8] = [
    Highlight {
        title: "Professional Documentation",
        description: "Detailed README with badges, features, installation",
    },
    Highlight {
        title: "Enterprise Code Quality",
        description: "Clean architecture, proper file organization",
    },
    Highlight {
        title: "Complete Feature Set",
        description: "5 payment methods, analytics, inventory, printing",
    },
    Highlight {
        title: "Production Ready",
        description: "GST compliance, bill printing, real-time analytics",
    },
    Highlight {
        title: "Open Source Friendly",
        description: "MIT license, contribution guidelines, CI/CD",
    },
    Highlight {
        title: "Developer Experience",
        description: "Easy setup, clear documentation, good practices",
    },
    Highlight {
        title: "Community Ready",
        description: "Issues, discussions, proper Git workflow",
    },
    Highlight {
        title: "Deployment Ready",
        description: "GitHub Pages, Netlify, Vercel compatible",
    },
];

const STATISTICS: [Statistic; 8] = [
    Statistic {
        label: "Total Files",
        value: "29 files (24 code + 5 GitHub files)",
    },
    Statistic {
        label: "React Components",
        value: "7 components (Navigation + 6 main features)",
    },
    Statistic {
        label: "Custom Hooks",
        value: "3 hooks (cart, inventory, orders)",
    },
    Statistic {
        label: "Utility Functions",
        value: "3 utils (calculations, printing, export)",
    },
    Statistic {
        label: "Menu Items",
        value: "21 items across 4 categories",
    },
    Statistic {
        label: "Payment Methods",
        value: "5 methods (Cash, Card, UPI, Wallets, Banking)",
    },
    Statistic {
        label: "Tables Supported",
        value: "10 tables with status management",
    },
    Statistic {
        label: "Documentation",
        value: "Over 1000 lines of comprehensive docs",
    },
];

const BENEFITS: [&str; 8] = [
    "🌍 Global Accessibility - Anyone can clone and use your system",
    "🤝 Community Contributions - Other developers can improve the code",
    "📈 Portfolio Enhancement - Showcase your React development skills",
    "🔍 Discoverability - Searchable on GitHub with relevant topics",
    "🚀 Easy Deployment - One-click deploy to Netlify, Vercel, etc.",
    "📊 Analytics - Track stars, forks, and community engagement",
    "🔄 Version Control - Complete Git history and release management",
    "💼 Professional Credibility - Demonstrates real-world project experience",
];

// Line-by-line so the two trailing spaces after DOCUMENTATION survive editors.
const CLOSING_BODY: &str = concat!(
    "\n",
    "Your Hotel Billing System is now ready for GitHub with:\n",
    "\n",
    "🏆 ENTERPRISE-GRADE CODEBASE\n",
    "   • Professional React architecture\n",
    "   • Complete payment processing system\n",
    "   • Real-time analytics and reporting\n",
    "   • Production-ready with GST compliance\n",
    "\n",
    "📚 COMPREHENSIVE DOCUMENTATION  \n",
    "   • Detailed README with installation guide\n",
    "   • Step-by-step GitHub upload instructions\n",
    "   • Contribution guidelines for community\n",
    "   • MIT license for open source distribution\n",
    "\n",
    "🔧 DEVELOPER-FRIENDLY SETUP\n",
    "   • Automated CI/CD pipeline with GitHub Actions\n",
    "   • Proper .gitignore and project structure\n",
    "   • Easy one-command installation\n",
    "   • Mobile responsive and accessible design\n",
    "\n",
    "🌟 COMMUNITY READY\n",
    "   • Open source with MIT license\n",
    "   • Professional contribution guidelines\n",
    "   • Issue templates and community features\n",
    "   • Release management and version control\n",
    "\n",
    "🚀 TIME TO UPLOAD TO GITHUB!\n",
    "\n",
    "Follow the commands above and your enterprise-grade\n",
    "hotel billing system will be live for the world to see!\n",
    "\n",
    "This project rivals commercial systems costing thousands\n",
    "of dollars - and now it's open source! 💪\n",
);

const SIGN_OFF: [&str; 2] = [
    "🌟 Ready to make your mark in the developer community!",
    "📤 Upload to GitHub and share your creation with the world!",
];

/// Build the hotel billing system upload report
pub fn hotel_billing_report() -> Report {
    Report {
        title: TITLE,
        files: FILES.to_vec(),
        commands: COMMANDS.to_vec(),
        features: FEATURES.to_vec(),
        highlights: HIGHLIGHTS.to_vec(),
        statistics: STATISTICS.to_vec(),
        benefits: BENEFITS.to_vec(),
        closing: Closing {
            body: CLOSING_BODY,
            sign_off: SIGN_OFF,
        },
    }
}
