use leptos::{either::Either, prelude::*, task::spawn_local};

use super::icon::Icon;
use super::scroll::open_external;
use crate::clipboard::{write_text, CopyFeedback, COPY_FEEDBACK};
use crate::glyph::Glyph;
use crate::notice::Notices;
use crate::portfolio::{Channel, ContactInfo};

#[component]
pub fn ContactSection(contact: &'static ContactInfo) -> impl IntoView {
    let (revealed, set_revealed) = signal(false);
    let notices = expect_context::<RwSignal<Notices>>();
    let feedback = RwSignal::new(CopyFeedback::new());

    let copy = move |text: &'static str, label: &'static str| {
        spawn_local(async move {
            let outcome = write_text(text).await;
            let ticket = notices
                .try_update(|n| feedback.try_update(|f| f.record(label, outcome, n)))
                .flatten()
                .flatten();
            if let Some(ticket) = ticket {
                set_timeout(
                    move || {
                        feedback.maybe_update(|f| f.expire(ticket));
                    },
                    COPY_FEEDBACK,
                );
            }
        });
    };

    view! {
        <section id="contact" class="py-20 relative overflow-hidden">
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute top-0 left-1/2 transform -translate-x-1/2 w-96 h-96 rounded-full bg-gradient-to-r from-neon-cyan/20 to-neon-purple/20 blur-3xl"></div>
                <div class="absolute bottom-0 right-1/4 w-72 h-72 rounded-full bg-gradient-to-r from-neon-pink/10 to-transparent blur-3xl"></div>
            </div>
            <div class="max-w-4xl mx-auto px-6">
                <div class="text-center mb-16 space-y-4">
                    <h2 class="text-4xl lg:text-6xl font-orbitron font-bold text-gradient">
                        "GET IN TOUCH"
                    </h2>
                    <div class="h-1 w-32 bg-gradient-to-r from-primary to-accent rounded-full mx-auto glow-cyan"></div>
                    <p class="text-xl text-muted-foreground font-rajdhani max-w-2xl mx-auto">
                        "Ready to collaborate? Let's build something amazing together."
                    </p>
                </div>
                <div class="text-center">
                    {move || {
                        if revealed.get() {
                            Either::Right(view! { <ContactDetails contact feedback copy /> })
                        } else {
                            Either::Left(
                                view! {
                                    <div class="glass-card p-12 rounded-2xl mx-auto max-w-md hover-lift space-y-6">
                                        <div class="w-20 h-20 mx-auto rounded-full bg-gradient-to-r from-primary to-accent p-1 glow-cyan">
                                            <div class="w-full h-full rounded-full bg-background flex items-center justify-center text-primary">
                                                <Icon glyph=Glyph::Send class="w-8 h-8" />
                                            </div>
                                        </div>
                                        <h3 class="text-2xl font-orbitron font-bold text-foreground">
                                            "Let's Connect"
                                        </h3>
                                        <p class="text-muted-foreground font-rajdhani">
                                            "Click below to reveal my contact information"
                                        </p>
                                        <button
                                            class="w-full px-8 py-3 rounded-md bg-primary hover:bg-primary/90 text-primary-foreground font-rajdhani font-semibold tracking-wide glow-cyan"
                                            on:click=move |_| set_revealed(true)
                                        >
                                            "Reveal Contact Details"
                                        </button>
                                    </div>
                                },
                            )
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails<F>(
    contact: &'static ContactInfo,
    feedback: RwSignal<CopyFeedback>,
    copy: F,
) -> impl IntoView
where
    F: Fn(&'static str, &'static str) + Copy + Send + Sync + 'static,
{
    let mailto = contact.mailto();
    let linkedin = contact.linkedin.as_str();

    view! {
        <div class="animate-fade-in">
            <div class="grid md:grid-cols-2 gap-8 mb-12">
                <ContactCard
                    channel=Channel::Email
                    action=move || view! { <CopyButton channel=Channel::Email contact feedback copy /> }
                >
                    <a
                        href=mailto.clone()
                        class="text-muted-foreground font-rajdhani hover:text-primary transition-colors"
                    >
                        {contact.email.clone()}
                    </a>
                </ContactCard>
                <ContactCard
                    channel=Channel::LinkedIn
                    action=move || {
                        view! {
                            <button
                                class="p-2 text-muted-foreground hover:text-primary"
                                aria-label="Open LinkedIn"
                                on:click=move |_| open_external(linkedin)
                            >
                                <Icon glyph=Glyph::Send class="w-4 h-4" />
                            </button>
                        }
                    }
                >
                    <p class="text-muted-foreground font-rajdhani">"Professional Profile"</p>
                </ContactCard>
                <ContactCard
                    channel=Channel::Phone
                    action=move || view! { <CopyButton channel=Channel::Phone contact feedback copy /> }
                >
                    <p class="text-muted-foreground font-rajdhani">{contact.phone.clone()}</p>
                </ContactCard>
                <ContactCard
                    channel=Channel::Location
                    action=move || {
                        view! { <CopyButton channel=Channel::Location contact feedback copy /> }
                    }
                >
                    <p class="text-muted-foreground font-rajdhani">{contact.location.clone()}</p>
                </ContactCard>
            </div>
            <div class="flex flex-col sm:flex-row gap-4 justify-center">
                <a
                    href=mailto
                    class="px-8 py-3 rounded-md bg-primary hover:bg-primary/90 text-primary-foreground font-rajdhani font-semibold tracking-wide glow-cyan"
                >
                    <Icon glyph=Glyph::Mail class="w-4 h-4 mr-2" />
                    "Send Email"
                </a>
                <a
                    href=linkedin
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-8 py-3 rounded-md border border-primary text-primary hover:bg-primary hover:text-primary-foreground font-rajdhani font-semibold tracking-wide"
                >
                    <Icon glyph=Glyph::Linkedin class="w-4 h-4 mr-2" />
                    "Connect on LinkedIn"
                </a>
            </div>
            <div class="mt-12 text-center">
                <div class="inline-flex items-center space-x-2 glass-card px-6 py-3 rounded-full">
                    <div class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></div>
                    <span class="text-sm font-rajdhani text-muted-foreground">
                        "Usually responds within 24 hours"
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactCard(channel: Channel, #[prop(into)] action: ViewFn, children: Children) -> impl IntoView {
    view! {
        <div class="glass-card p-6 rounded-2xl hover-lift group">
            <div class="flex items-center space-x-4">
                <div class=format!("p-3 rounded-xl bg-gradient-to-r {}", channel.accent())>
                    <Icon glyph=channel.glyph() class="w-6 h-6 text-background" />
                </div>
                <div class="flex-1 text-left">
                    <h4 class="font-orbitron font-semibold text-foreground mb-1">{channel.label()}</h4>
                    {children()}
                </div>
                {action.run()}
            </div>
        </div>
    }
}

#[component]
fn CopyButton<F>(
    channel: Channel,
    contact: &'static ContactInfo,
    feedback: RwSignal<CopyFeedback>,
    copy: F,
) -> impl IntoView
where
    F: Fn(&'static str, &'static str) + Copy + Send + Sync + 'static,
{
    let label = channel.label();
    let text = contact.value(channel);
    view! {
        <button
            class="p-2 text-muted-foreground hover:text-primary"
            aria-label=format!("Copy {label}")
            on:click=move |_| copy(text, label)
        >
            <Icon glyph=Signal::derive(move || feedback.with(|f| f.glyph(label))) class="w-4 h-4" />
        </button>
    }
}
