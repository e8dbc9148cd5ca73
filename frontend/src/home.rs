use yew::prelude::*;
use crate::{join_waitlist::JoinWaitlist, navbar::Navbar, styles::*};

struct Step {
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        title: "Paste Your GitHub URL",
        description: "Provide your GitHub repository URL and the address where it runs.",
    },
    Step {
        title: "AI Scans Repository",
        description: "Code quality, project structure and documentation are analyzed.",
    },
    Step {
        title: "Lighthouse Performance Check",
        description: "Lighthouse runs against your live URL to measure performance, accessibility and SEO.",
    },
    Step {
        title: "Get Your Score via Email",
        description: "Receive a full report with scores and actionable insights.",
    },
];

const FEATURES: [(&str, &str); 6] = [
    ("AI-Powered Analysis", "Models trained on real reviews evaluate code quality and best practices."),
    ("Hackathon-Ready Scoring", "Scoring criteria modelled on what hackathon judges look for."),
    ("Comprehensive Reports", "Detailed breakdowns with concrete steps to raise your score."),
    ("Lightning Fast", "Results in minutes, not days. Made for tight deadlines."),
    ("Secure & Private", "Only public repositories are analyzed and nothing sensitive is stored."),
    ("Performance Metrics", "Real Lighthouse numbers to get your project production-ready."),
];

const STATS: [(&str, &str); 4] = [
    ("1,247+", "Repositories Analyzed"),
    ("23%", "Average Score Improvement"),
    ("50+", "Hackathons Supported"),
    ("98%", "Developer Satisfaction"),
];

fn render_stat((value, label): (&str, &str)) -> Html {
    html! {
        <div class="text-center">
            <div class={combine_classes("text-3xl font-bold mb-2", GRADIENT_TEXT)}>{value}</div>
            <div class={TEXT_MUTED}>{label}</div>
        </div>
    }
}

#[function_component]
fn Hero() -> Html {
    html! {
        <section id="home" class="min-h-screen flex items-center pt-20">
            <div class="container mx-auto px-6 max-w-4xl space-y-8">
                <div class="text-sm font-medium uppercase tracking-wider text-blue-300">
                    {"AI-Powered Repository Analysis"}
                </div>
                <h1 class={HEADING_XL}>
                    {"AI-powered Repo "}
                    <span class={GRADIENT_TEXT}>{"Scoring"}</span>
                    {" for "}
                    <span class={GRADIENT_TEXT}>{"Hackathons"}</span>
                    {" & Developers"}
                </h1>
                <p class="text-xl text-gray-400 leading-relaxed max-w-2xl">
                    {"Get comprehensive scoring for your GitHub repositories based on code quality, \
                      documentation and live performance. Perfect for hackathon submissions and project evaluation."}
                </p>
                <div class="max-w-xl">
                    <JoinWaitlist />
                </div>
                <div class="flex space-x-8 pt-8">
                    {render_stat(("1000+", "Repos Analyzed"))}
                    {render_stat(("95%", "Accuracy Rate"))}
                    {render_stat(("5sec", "Average Scan Time"))}
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn HowItWorks() -> Html {
    html! {
        <section id="how-it-works" class="py-24">
            <div class="container mx-auto px-6">
                <div class="text-center space-y-4 mb-16">
                    <h2 class="text-4xl font-bold text-gray-100">
                        {"How "}<span class={GRADIENT_TEXT}>{"Uplix"}</span>{" Works"}
                    </h2>
                    <p class="text-xl text-gray-400 max-w-2xl mx-auto">
                        {"A streamlined process that keeps repository evaluation simple."}
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {for STEPS.iter().enumerate().map(|(index, step)| html! {
                        <div class={combine_classes(CARD_HOVER_SCALE, "relative")}>
                            <div class="absolute -top-4 -left-4 w-8 h-8 rounded-full bg-blue-600 text-white font-bold flex items-center justify-center">
                                {index + 1}
                            </div>
                            <h3 class={HEADING_SM}>{step.title}</h3>
                            <p class="text-gray-400 leading-relaxed">{step.description}</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn Features() -> Html {
    html! {
        <section id="features" class="py-24">
            <div class="container mx-auto px-6">
                <div class="text-center space-y-4 mb-16">
                    <h2 class="text-4xl font-bold text-gray-100">
                        {"Why Choose "}<span class={GRADIENT_TEXT}>{"Uplix?"}</span>
                    </h2>
                    <p class="text-xl text-gray-400 max-w-3xl mx-auto">
                        {"Built by developers, for developers, with real-world evaluation criteria."}
                    </p>
                </div>
                <div class={GRID_CARDS}>
                    {for FEATURES.iter().map(|(title, description)| html! {
                        <div class={CARD_HOVER_SCALE}>
                            <h3 class={HEADING_SM}>{*title}</h3>
                            <p class="text-gray-400 leading-relaxed">{*description}</p>
                        </div>
                    })}
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mt-16 pt-16 border-t border-gray-800">
                    {for STATS.iter().copied().map(render_stat)}
                </div>
            </div>
        </section>
    }
}

#[function_component]
fn CallToAction() -> Html {
    html! {
        <section id="submit-repo" class="py-24">
            <div class="container mx-auto px-6 text-center space-y-8 max-w-4xl">
                <span class={CHIP}>{"Trusted by 1000+ developers"}</span>
                <h2 class="text-4xl lg:text-6xl font-bold leading-tight text-gray-100">
                    {"Ready to Score Your "}<span class={GRADIENT_TEXT}>{"Repository?"}</span>
                </h2>
                <p class="text-xl text-gray-400 max-w-2xl mx-auto leading-relaxed">
                    {"Join the waitlist and be among the first to get AI-powered insights on your projects."}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <a href="#home" class={combine_classes(&button_primary(false), "rounded-full px-8 py-3 text-lg")}>
                        {"Join Waitlist"}
                    </a>
                    <a href="#how-it-works" class={combine_classes(&button_secondary(), "rounded-full px-8 py-3 text-lg")}>
                        {"Learn More"}
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Public landing page.
#[function_component]
pub fn Home() -> Html {
    html! {
        <div class={BG_PAGE}>
            <Navbar />
            <Hero />
            <HowItWorks />
            <Features />
            <CallToAction />
        </div>
    }
}
