use crate::content::{self, Experience, Project};
use crate::effects::{
    highlight_runs, particle_ring, pointer_offset, tilt_rotation, tilt_transform, RevealLatch,
    Scramble, TaglineSequence, REVEAL_THRESHOLD, SCRAMBLE_TICK_MS, TILT_RESET_TRANSFORM,
};
use gloo::timers::callback::Interval;
use gloo::timers::future::TimeoutFuture;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};
use yew::{create_portal, prelude::*};

const INTERACTIVE_SELECTOR: &str = "a, button, .skill-card, .project-card";

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

#[function_component(CustomCursor)]
fn custom_cursor() -> Html {
    let dot = use_node_ref();
    let outline = use_node_ref();

    {
        let dot = dot.clone();
        let outline = outline.clone();
        use_effect_with((), move |_| {
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let left = format!("{}px", event.client_x());
                let top = format!("{}px", event.client_y());

                if let Some(element) = dot.cast::<HtmlElement>() {
                    let style = element.style();
                    let _ = style.set_property("left", &left);
                    let _ = style.set_property("top", &top);
                }

                // The outline trails behind through its CSS transition.
                if let Some(element) = outline.cast::<HtmlElement>() {
                    let style = element.style();
                    let _ = style.set_property("left", &left);
                    let _ = style.set_property("top", &top);
                }

                let hovering = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
                    .is_some();
                if let Some(body) = document().and_then(|d| d.body()) {
                    let _ = body.class_list().toggle_with_force("hovering", hovering);
                }
            });

            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "mousemove",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    html! {
        <>
            <div class="cursor-dot" ref={dot}></div>
            <div class="cursor-outline" ref={outline}></div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct TiltCardProps {
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(TiltCard)]
fn tilt_card(props: &TiltCardProps) -> Html {
    let card = use_node_ref();

    let onmousemove = {
        let card = card.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = card.cast::<HtmlElement>() else {
                return;
            };
            // Layout can shift between events; measure per event.
            let rect = element.get_bounding_client_rect();
            let (x, y) = pointer_offset(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                rect.left(),
                rect.top(),
            );
            let rotation = tilt_rotation(x, y, rect.width(), rect.height());
            let _ = element
                .style()
                .set_property("transform", &tilt_transform(rotation));
        })
    };

    let onmouseleave = {
        let card = card.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(element) = card.cast::<HtmlElement>() else {
                return;
            };
            let _ = element
                .style()
                .set_property("transform", TILT_RESET_TRANSFORM);
        })
    };

    html! {
        <div
            ref={card}
            class={classes!("tilt-card", props.class.clone())}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
        >
            { props.children.clone() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SectionTitleProps {
    title: AttrValue,
}

#[function_component(SectionTitle)]
fn section_title(props: &SectionTitleProps) -> Html {
    let display = {
        let title = props.title.clone();
        use_state(move || title.to_string())
    };
    let scramble_handle = use_mut_ref(|| None::<Interval>);

    let onmouseenter = {
        let display = display.clone();
        let scramble_handle = scramble_handle.clone();
        let title = props.title.clone();
        Callback::from(move |_: MouseEvent| {
            // At most one scramble per heading: drop any in-flight timer first.
            scramble_handle.borrow_mut().take();

            let scramble = Rc::new(RefCell::new(Scramble::new(title.as_str())));
            let display = display.clone();
            let handle_for_tick = scramble_handle.clone();
            let interval = Interval::new(SCRAMBLE_TICK_MS, move || {
                let frame = scramble.borrow_mut().tick(js_sys::Math::random);
                display.set(frame);
                if scramble.borrow().is_done() {
                    handle_for_tick.borrow_mut().take();
                }
            });
            *scramble_handle.borrow_mut() = Some(interval);
        })
    };

    html! {
        <h2 class="section-title" onmouseenter={onmouseenter}>{ (*display).clone() }</h2>
    }
}

#[function_component(PixelParticles)]
fn pixel_particles() -> Html {
    // One-shot generation; re-renders keep the same ring.
    let particles = use_memo((), |_| particle_ring(js_sys::Math::random));

    html! {
        <div class="pixel-particles">
            { for particles.iter().map(|particle| {
                let style = format!(
                    "--x: {:.1}px; --y: {:.1}px; --size: {:.1}px; --color: {}; --delay: {:.2}s",
                    particle.x(),
                    particle.y(),
                    particle.size,
                    particle.color.css_value(),
                    particle.delay_seconds,
                );
                html! { <div class="pixel-particle" style={style}></div> }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct InteractiveTextProps {
    content: AttrValue,
}

#[function_component(InteractiveText)]
fn interactive_text(props: &InteractiveTextProps) -> Html {
    let runs = use_memo(props.content.clone(), |text| {
        highlight_runs(text, content::HIGHLIGHT_KEYWORDS)
    });

    html! {
        <p>
            { for runs.iter().map(|run| {
                if run.keyword {
                    html! {
                        <span class="highlight-word" data-text={run.text.clone()}>
                            { run.text.clone() }
                        </span>
                    }
                } else {
                    html! { <>{ run.text.clone() }</> }
                }
            }) }
        </p>
    }
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    id: AttrValue,
    #[prop_or_default]
    children: Html,
}

#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let section = use_node_ref();

    {
        let section = section.clone();
        use_effect_with((), move |_| {
            type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
            let mut observation: Option<(IntersectionObserver, ObserverCallback)> = None;

            if let Some(element) = section.cast::<Element>() {
                let latch = Rc::new(RefCell::new(RevealLatch::new()));
                let callback: ObserverCallback = Closure::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if latch.borrow_mut().observe(entry.is_intersecting()) {
                                let target = entry.target();
                                let _ = target.class_list().add_1("visible");
                                // Latched for good; stop watching this section.
                                observer.unobserve(&target);
                            }
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

                if let Ok(observer) = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    observer.observe(&element);
                    observation = Some((observer, callback));
                }
            }

            move || {
                if let Some((observer, _callback)) = observation {
                    observer.disconnect();
                }
            }
        });
    }

    html! {
        <section id={props.id.clone()} class="container reveal" ref={section}>
            { props.children.clone() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceCardProps {
    experience: &'static Experience,
}

#[function_component(ExperienceCard)]
fn experience_card(props: &ExperienceCardProps) -> Html {
    let expanded = use_state(|| false);
    let experience = props.experience;

    let open = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(true))
    };
    let close = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(false))
    };
    // Clicks inside the detail panel must not reach the backdrop.
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    let overlay = if *expanded {
        // Composited from <body>, outside any ancestor tilt transform.
        document()
            .and_then(|d| d.body())
            .map(|body| {
                create_portal(
                    html! {
                        <div class="modal-overlay" onclick={close.clone()}>
                            <div class="modal-content" onclick={keep_open.clone()}>
                                <button class="modal-close" onclick={close.clone()}>
                                    <i class="fa-solid fa-xmark"></i>
                                </button>
                                <div class="modal-header">
                                    <h3>{ experience.role }</h3>
                                    <h4>{ experience.company }</h4>
                                    <span class="experience-location">
                                        { format!("{} | {}", experience.location, experience.date) }
                                    </span>
                                </div>
                                <div class="modal-body">
                                    <p>{ experience.description }</p>
                                    { company_overview(experience) }
                                    <h5 class="modal-subheading">{ "Skills Used:" }</h5>
                                    <div class="experience-tags">
                                        { for experience.skills.iter().map(|skill| html! {
                                            <span class="experience-tag">{ *skill }</span>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        </div>
                    },
                    body.into(),
                )
            })
            .unwrap_or_default()
    } else {
        Html::default()
    };

    html! {
        <>
            <div class="experience-content" onclick={open}>
                <div class="experience-header">
                    <h3>{ experience.role }</h3>
                    <h4>{ format!("{} · {}", experience.company, experience.employment_type) }</h4>
                    <span class="experience-location">{ experience.location }</span>
                </div>
                <div class="click-hint">
                    { "Click for details " }
                    <i class="fa-solid fa-arrow-up-right-from-square"></i>
                </div>
            </div>
            { overlay }
        </>
    }
}

fn company_overview(experience: &Experience) -> Html {
    if experience.website.is_none()
        && experience.industry.is_none()
        && experience.company_size.is_none()
    {
        return Html::default();
    }

    html! {
        <div class="company-overview">
            <h5>{ "Company Overview" }</h5>
            { experience.website.map(|website| html! {
                <p>
                    <strong>{ "Website: " }</strong>
                    <a href={website} target="_blank" rel="noopener noreferrer">{ website }</a>
                </p>
            }).unwrap_or_default() }
            { experience.industry.map(|industry| html! {
                <p><strong>{ "Industry: " }</strong>{ industry }</p>
            }).unwrap_or_default() }
            { experience.company_size.map(|company_size| html! {
                <p><strong>{ "Company size: " }</strong>{ company_size }</p>
            }).unwrap_or_default() }
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let tagline = use_state(String::new);

    {
        let tagline = tagline.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let task_alive = alive.clone();

            spawn_local(async move {
                let mut sequence = TaglineSequence::new();
                loop {
                    // Liveness check before every buffer write; a torn-down
                    // hero freezes the text where it was.
                    if !task_alive.get() {
                        return;
                    }
                    let Some(delay_ms) = sequence.advance() else {
                        break;
                    };
                    tagline.set(sequence.buffer().to_string());
                    TimeoutFuture::new(delay_ms).await;
                }
                log::debug!("tagline sequence complete");
            });

            move || alive.set(false)
        });
    }

    html! {
        <header class="hero">
            <div class="hero-content">
                <div class="pixel-avatar"></div>
                <div class="glitch-wrapper">
                    <h1 class="name glitch" data-text={content::NAME}>{ content::NAME }</h1>
                </div>
                <p class="tagline">{ (*tagline).clone() }</p>
            </div>
        </header>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    let panel = use_node_ref();

    let onmousemove = {
        let panel = panel.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = panel.cast::<HtmlElement>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let (x, y) = pointer_offset(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                rect.left(),
                rect.top(),
            );
            let style = element.style();
            let _ = style.set_property("--mouse-x", &format!("{x:.1}px"));
            let _ = style.set_property("--mouse-y", &format!("{y:.1}px"));
        })
    };

    html! {
        <Reveal id="about">
            <SectionTitle title="01. ABOUT ME" />
            <div class="about-content" ref={panel} onmousemove={onmousemove}>
                <TiltCard class={classes!("profile-tilt")}>
                    <img src="/assets/profile.jpg" alt={content::NAME} class="profile-pic" />
                    <PixelParticles />
                </TiltCard>
                <div class="about-text">
                    <InteractiveText content={content::ABOUT_TEXT} />
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(SkillsSection)]
fn skills_section() -> Html {
    html! {
        <Reveal id="skills">
            <SectionTitle title="02. SKILLS" />
            { for content::SKILL_GROUPS.iter().map(|group| html! {
                <>
                    <h3 class="skill-category-title">{ group.title }</h3>
                    <div class="skills-grid">
                        { for group.skills.iter().map(|skill| html! {
                            <TiltCard class={classes!("skill-card")}>
                                <i class={skill.icon}></i>
                                <span>{ skill.label }</span>
                            </TiltCard>
                        }) }
                    </div>
                </>
            }) }
        </Reveal>
    }
}

#[function_component(ExperienceSection)]
fn experience_section() -> Html {
    html! {
        <Reveal id="experience">
            <SectionTitle title="03. EXPERIENCE" />
            <div class="experience-timeline">
                { for content::EXPERIENCES.iter().map(|experience| html! {
                    <div class="experience-item">
                        <div class="experience-date">{ experience.date }</div>
                        <ExperienceCard {experience} />
                    </div>
                }) }
            </div>
        </Reveal>
    }
}

fn project_card(index: usize, project: &'static Project) -> Html {
    let background = match project.image {
        Some(image) => format!(
            "background-image: url({image}); background-size: cover; background-position: center;"
        ),
        None if index % 2 == 0 => {
            "background-image: linear-gradient(135deg, #1e293b, #0f172a);".to_string()
        }
        None => "background-image: linear-gradient(135deg, #2d1b4e, #1a103c);".to_string(),
    };

    html! {
        <TiltCard class={classes!("project-card")}>
            <div class="project-image" style={background}></div>
            <div class="project-info">
                <div class="project-title-row">
                    <h3>{ project.title }</h3>
                    <span class="project-tech">{ project.tech }</span>
                </div>
                <p>{ project.description }</p>
                <div class="project-links">
                    <a href={project.link} class="btn" target="_blank" rel="noopener noreferrer">
                        { "View Project" }
                    </a>
                    <a href={project.link} class="btn-secondary" target="_blank" rel="noopener noreferrer">
                        <i class="fa-brands fa-github"></i>
                        { " Code" }
                    </a>
                </div>
            </div>
        </TiltCard>
    }
}

#[function_component(ProjectsSection)]
fn projects_section() -> Html {
    html! {
        <Reveal id="projects">
            <SectionTitle title="04. PROJECTS" />
            <div class="project-grid">
                { for content::PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| project_card(index, project)) }
            </div>
        </Reveal>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <Reveal id="contact">
            <SectionTitle title="05. CONTACT" />
            <p class="contact-message">{ content::CONTACT_MESSAGE }</p>
            <a href={format!("mailto:{}", content::EMAIL)} class="btn btn-large">{ "Say Hello!" }</a>
            <div class="social-links">
                <a href={content::GITHUB_URL} target="_blank" rel="noopener noreferrer">
                    <i class="fa-brands fa-github"></i>
                </a>
                <a href={content::LINKEDIN_URL} target="_blank" rel="noopener noreferrer">
                    <i class="fa-brands fa-linkedin"></i>
                </a>
            </div>
        </Reveal>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <main>
            <CustomCursor />
            <Hero />
            <AboutSection />
            <SkillsSection />
            <ExperienceSection />
            <ProjectsSection />
            <ContactSection />
            <footer>
                <p>{ content::FOOTER_LINE }</p>
            </footer>
        </main>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pixel-portfolio starting");

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
