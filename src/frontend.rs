use crate::contact::{ContactAction, ContactForm, Field, SubmissionStatus};
use crate::content::{
    mailto_href, Section, CERTIFICATIONS, EDUCATION, EMAIL, FOOTER_LINKS, HERO_STATS, PERSONAL,
    PHONE, PHONE_HREF, PROJECTS, RESUME_HREF, SKILLS, SOCIAL_LINKS,
};
use crate::theme::{Theme, ThemeHost, ThemeManager, THEME_KEY};
use crate::viewport::{PointerFraction, SectionBounds, Subscription, ViewportState};
use gloo_console::{debug, info};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement, MouseEvent, ScrollBehavior,
    ScrollToOptions, Storage,
};
use yew::prelude::*;

const BOOT_SPLASH: Duration = Duration::from_millis(2_000);

fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_root_marker(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    let _ = classes.remove_1(theme.toggled().root_class());
    let _ = classes.add_1(theme.root_class());
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Theme host backed by `localStorage`, `matchMedia` and the document root.
struct BrowserThemeHost;

impl ThemeHost for BrowserThemeHost {
    fn stored_theme(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn persist_theme(&self, theme: Theme) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, theme.as_str());
        }
    }

    fn system_prefers_dark(&self) -> bool {
        media_matches("(prefers-color-scheme: dark)")
    }

    fn apply_theme(&self, theme: Theme) {
        apply_root_marker(theme);
    }

    fn transition_theme(&self, theme: Theme) {
        if media_matches("(prefers-reduced-motion: reduce)") {
            apply_root_marker(theme);
            return;
        }

        let Some(document) = window().and_then(|w| w.document()) else {
            apply_root_marker(theme);
            return;
        };

        let document_js: JsValue = document.into();
        let Ok(start_view_transition) =
            Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
        else {
            apply_root_marker(theme);
            return;
        };

        let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
            apply_root_marker(theme);
            return;
        };

        // The browser invokes the update callback after this call returns.
        let update = Closure::once_into_js(move || apply_root_marker(theme));

        if start_view_transition.call1(&document_js, &update).is_err() {
            apply_root_marker(theme);
        }
    }
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn scroll_offset() -> u32 {
    let offset = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
    // Saturating float cast; overscroll bounce can report negatives.
    offset.max(0.0).round() as u32
}

fn measure_sections() -> Vec<(Section, SectionBounds)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    Section::ALL
        .into_iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some((
                section,
                SectionBounds {
                    top: element.offset_top(),
                    height: element.offset_height(),
                },
            ))
        })
        .collect()
}

pub enum ViewportEvent {
    Scrolled {
        offset: u32,
        sections: Vec<(Section, SectionBounds)>,
    },
    PointerMoved(PointerFraction),
}

impl Reducible for ViewportState {
    type Action = ViewportEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ViewportEvent::Scrolled { offset, sections } => self.on_scroll(offset, |section| {
                sections
                    .iter()
                    .find(|(candidate, _)| *candidate == section)
                    .map(|(_, bounds)| *bounds)
            }),
            ViewportEvent::PointerMoved(pointer) => self.on_pointer(pointer),
        };

        Rc::new(next)
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

fn subscribe_viewport(
    dispatcher: UseReducerDispatcher<ViewportState>,
) -> Option<Subscription<(EventListener, EventListener)>> {
    let win = window()?;

    let on_scroll = {
        let dispatcher = dispatcher.clone();
        EventListener::new(&win, "scroll", move |_event| {
            dispatcher.dispatch(ViewportEvent::Scrolled {
                offset: scroll_offset(),
                sections: measure_sections(),
            });
        })
    };

    let on_pointer = EventListener::new(&win, "mousemove", move |event: &Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let (width, height) = viewport_size();
        dispatcher.dispatch(ViewportEvent::PointerMoved(PointerFraction::from_client(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            width,
            height,
        )));
    });

    Some(Subscription::new((on_scroll, on_pointer)))
}

fn field_edit(event: &InputEvent) -> Option<ContactAction> {
    let target = event.target()?;

    let (id, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        (input.id(), input.value())
    } else {
        let area = target.dyn_ref::<HtmlTextAreaElement>()?;
        (area.id(), area.value())
    };

    Field::from_id(&id).map(|field| ContactAction::Edit(field, value))
}

#[function_component(LoadingScreen)]
fn loading_screen() -> Html {
    let letters = PERSONAL.short_name.to_uppercase();

    html! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-content">
                <div class="loading-logo-container">
                    <span class="loading-monogram">{PERSONAL.monogram()}</span>
                    <div class="loading-pulse"></div>
                </div>
                <div class="loading-bar">
                    <div class="loading-progress"></div>
                </div>
                <div class="loading-message">
                    { for letters.chars().map(|letter| html! {
                        <span class="message-char">{letter.to_string()}</span>
                    }) }
                </div>
                <p class="loading-sub">{PERSONAL.role}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ThemeToggleProps {
    theme: Theme,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
fn theme_toggle(props: &ThemeToggleProps) -> Html {
    html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={props.theme.toggle_label()}
            aria-pressed={props.theme.is_dark().to_string()}
            onclick={props.on_toggle.clone()}
        >
            <span class="sun-icon" aria-hidden="true">{"☀"}</span>
            <span class="moon-icon" aria-hidden="true">{"☾"}</span>
        </button>
    }
}

fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[function_component(BackToTop)]
fn back_to_top() -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button class="back-to-top" type="button" aria-label="Back to top" {onclick}>
            <span aria-hidden="true">{"↑"}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    active: Section,
    scrolled: bool,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_item_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("premium-navbar", props.scrolled.then_some("scrolled"))}>
            <div class="nav-container">
                <a href={Section::Home.href()} class="nav-logo">
                    <span class="logo-text">{PERSONAL.short_name}</span>
                </a>
                <button
                    class="navbar-toggler"
                    type="button"
                    aria-controls="navbarNav"
                    aria-expanded={menu_open.to_string()}
                    aria-label="Toggle navigation"
                    onclick={on_menu_toggle}
                >
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div id="navbarNav" class={classes!("navbar-collapse", menu_open.then_some("show"))}>
                    <div class="nav-menu">
                        { for Section::ALL.into_iter().enumerate().map(|(index, section)| html! {
                            <a
                                key={section.id()}
                                href={section.href()}
                                class={classes!("nav-item", (props.active == section).then_some("active"))}
                                aria-current={(props.active == section).then_some("true")}
                                style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                                onclick={on_item_click.clone()}
                            >
                                <span class="nav-label">{section.label()}</span>
                                <span class="nav-indicator"></span>
                            </a>
                        }) }
                    </div>
                </div>
                <div class="nav-cta">
                    <a href={Section::Contact.href()} class="nav-cta-button">
                        <span>{"Let's Talk"}</span>
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    theme: Theme,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let (role_lead, role_tail) = PERSONAL.role_lines();

    html! {
        <section id={Section::Home.id()} class="premium-hero">
            <div class="hero-badge">
                <span class="badge-line"></span>
                <span class="badge-text">{"AVAILABLE FOR WORK"}</span>
                <span class="badge-dot"></span>
            </div>
            <div class="hero-grid">
                <div class="hero-image-wrapper">
                    <img src={props.theme.profile_image()} alt="A. Dharanish" class="hero-profile-image" />
                </div>
                <div class="hero-copy">
                    <h1 class="hero-title-large">
                        <span class="title-line">{role_lead}</span>
                        <span class="title-line">{role_tail}</span>
                    </h1>
                    <div class="hero-name-container">
                        <span class="hero-greeting">{"I'm"}</span>
                        <h2 class="hero-name-premium" aria-label={PERSONAL.name}>
                            { for PERSONAL.name.chars().enumerate().map(|(index, letter)| html! {
                                <span
                                    class="name-char"
                                    aria-hidden="true"
                                    style={format!("animation-delay: {:.2}s;", index as f64 * 0.03)}
                                >
                                    { if letter == ' ' { '\u{00A0}'.to_string() } else { letter.to_string() } }
                                </span>
                            }) }
                        </h2>
                    </div>
                    <p class="hero-subtitle">{PERSONAL.title}</p>
                    <p class="hero-description-premium">{PERSONAL.summary}</p>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div class="stat-item">
                                <span class="stat-number">{stat.value}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }) }
                    </div>
                    <div class="hero-cta-wrapper">
                        <a href={RESUME_HREF} download="cv.pdf" class="premium-button primary">
                            <span>{"Download CV"}</span>
                        </a>
                        <a href={Section::Projects.href()} class="premium-button secondary">
                            <span>{"View Work"}</span>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    section: Section,
    title: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header-premium">
            if let Some(tag) = props.section.tag() {
                <span class="section-tag">{tag}</span>
            }
            <h2 class="section-title-premium">{props.title.clone()}</h2>
            <div class="section-divider">
                <div class="divider-line"></div>
                <div class="divider-dot"></div>
            </div>
        </div>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id={Section::About.id()} class="premium-section">
            <SectionHeader section={Section::About} title="Education & Certifications" />
            <div class="about-grid">
                <div>
                    <h3 class="subsection-title-premium">{"Education"}</h3>
                    <ol class="timeline">
                        { for EDUCATION.iter().map(|entry| html! {
                            <li class="timeline-item">
                                <span class="timeline-date">{entry.duration}</span>
                                <h4 class="timeline-title">{entry.degree}</h4>
                                <p class="timeline-institution">{entry.institution}</p>
                                <p class="timeline-score">{entry.score}</p>
                            </li>
                        }) }
                    </ol>
                </div>
                <div>
                    <h3 class="subsection-title-premium">{"Certifications"}</h3>
                    <ul class="certifications-list">
                        { for CERTIFICATIONS.iter().map(|certification| html! {
                            <li class="certification-item">{*certification}</li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="premium-section">
            <SectionHeader section={Section::Services} title="Technical Skills" />
            <div class="skills-grid">
                { for SKILLS.iter().map(|category| html! {
                    <div class="skill-category" key={category.name}>
                        <h3 class="category-title">{category.name}</h3>
                        <ul class="skill-tags">
                            { for category.items.iter().map(|item| html! {
                                <li class="skill-tag">{*item}</li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    html! {
        <section id={Section::Projects.id()} class="premium-section">
            <SectionHeader section={Section::Projects} title="Featured Projects" />
            <div class="projects-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <article
                        class="project-card-premium"
                        key={project.title}
                        style={format!("--project-accent: {};", project.accent)}
                    >
                        <span class="project-icon" aria-hidden="true">{project.icon}</span>
                        <h3 class="project-title-premium">{project.title}</h3>
                        if let Some(role) = project.role {
                            <p class="project-role">{role}</p>
                        }
                        <ul class="project-points">
                            { for project.points.iter().map(|point| html! { <li>{*point}</li> }) }
                        </ul>
                        <ul class="project-tech">
                            { for project.tech.iter().map(|tech| html! { <li class="tech-tag">{*tech}</li> }) }
                        </ul>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    let status = form.status;

    {
        let dispatcher = form.dispatcher();
        use_effect_with(status, move |status| {
            debug!("contact form status", status.as_str());
            // Dropping the timeout cancels it, so leaving this status or
            // unmounting never delivers a stale transition.
            let timer = status.follow_up().map(|follow_up| {
                Timeout::new(timeout_millis(follow_up.after), move || {
                    dispatcher.dispatch(follow_up.action);
                })
            });
            move || drop(timer)
        });
    }

    let oninput = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some(action) = field_edit(&event) {
                dispatcher.dispatch(action);
            }
        })
    };

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(ContactAction::Submit);
        })
    };

    html! {
        <section id={Section::Contact.id()} class="premium-section contact-section">
            <div class="contact-grid">
                <div class="contact-info">
                    <span class="section-tag">{Section::Contact.tag().unwrap_or_default()}</span>
                    <h2 class="contact-title">{"Let's work together"}</h2>
                    <p class="contact-description">
                        {"Have a project in mind or want to chat? Send a message and I'll get back to you."}
                    </p>
                    <dl class="info-list">
                        <dt class="info-label">{"Email"}</dt>
                        <dd><a href={mailto_href()} class="info-value">{EMAIL}</a></dd>
                        <dt class="info-label">{"Phone"}</dt>
                        <dd><a href={PHONE_HREF} class="info-value">{PHONE}</a></dd>
                    </dl>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a href={link.href} class="social-link">{link.label}</a>
                        }) }
                    </div>
                </div>
                <form class="contact-form-premium" {onsubmit}>
                    <div class="form-row">
                        <label for={Field::Name.id()}>{"Your Name"}</label>
                        <input
                            id={Field::Name.id()}
                            type="text"
                            required=true
                            value={form.draft.name.clone()}
                            oninput={oninput.clone()}
                        />
                    </div>
                    <div class="form-row">
                        <label for={Field::Email.id()}>{"Your Email"}</label>
                        <input
                            id={Field::Email.id()}
                            type="email"
                            required=true
                            value={form.draft.email.clone()}
                            oninput={oninput.clone()}
                        />
                    </div>
                    <div class="form-row">
                        <label for={Field::Subject.id()}>{"Subject"}</label>
                        <input
                            id={Field::Subject.id()}
                            type="text"
                            required=true
                            value={form.draft.subject.clone()}
                            oninput={oninput.clone()}
                        />
                    </div>
                    <div class="form-row">
                        <label for={Field::Message.id()}>{"Message"}</label>
                        <textarea
                            id={Field::Message.id()}
                            rows="5"
                            required=true
                            value={form.draft.message.clone()}
                            oninput={oninput}
                        />
                    </div>
                    <button
                        type="submit"
                        class={classes!("submit-button-premium", status.as_str())}
                        disabled={!status.accepts_submit()}
                    >
                        {status.button_label()}
                    </button>
                    if status == SubmissionStatus::Success {
                        <p class="form-success" role="status">
                            {"Thanks! Your message has been sent."}
                        </p>
                    }
                </form>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="simple-footer">
            <div class="footer-social">
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <a href={link.href} class="simple-social-link" aria-label={link.label}>{link.label}</a>
                }) }
            </div>
            <p class="footer-copy">{format!("© 2025 {}. All rights reserved.", PERSONAL.short_name)}</p>
            <nav class="footer-links" aria-label="Legal">
                { for FOOTER_LINKS.iter().map(|label| html! { <a href="#">{*label}</a> }) }
            </nav>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme_manager = use_mut_ref(|| ThemeManager::initialize(BrowserThemeHost));
    let theme = use_state(|| theme_manager.borrow().current());
    let loading = use_state(|| true);
    let viewport = use_reducer(ViewportState::default);

    {
        let theme_manager = theme_manager.clone();
        let setter = theme.setter();
        use_effect_with((), move |_| {
            info!("theme initialised", theme_manager.borrow().current().as_str());
            theme_manager
                .borrow_mut()
                .on_change(move |is_dark| setter.set(Theme::from_dark(is_dark)));
            || ()
        });
    }

    {
        let setter = loading.setter();
        use_effect_with((), move |_| {
            let timer = Timeout::new(timeout_millis(BOOT_SPLASH), move || setter.set(false));
            move || drop(timer)
        });
    }

    {
        let dispatcher = viewport.dispatcher();
        use_effect_with((), move |_| {
            let subscription = subscribe_viewport(dispatcher);
            move || {
                if let Some(mut subscription) = subscription {
                    subscription.release();
                }
            }
        });
    }

    let on_toggle = {
        let theme_manager = theme_manager.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme_manager.borrow_mut().toggle();
            info!("theme toggled", next.as_str());
        })
    };

    if *loading {
        return html! { <LoadingScreen /> };
    }

    html! {
        <div class="premium-portfolio" style={viewport.pointer.css_vars()}>
            <Navbar active={viewport.active} scrolled={viewport.scrolled} />
            <BackToTop />
            <ThemeToggle theme={*theme} {on_toggle} />
            <main>
                <Hero theme={*theme} />
                <About />
                <Services />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

pub fn run() {
    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => yew::Renderer::<App>::new().render(),
    };
}
