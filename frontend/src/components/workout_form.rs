use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::workout::ActivityKind;
use yew::prelude::*;

use crate::form::{self, WorkoutDraft};

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    /// The form only opens once a map click has recorded a location.
    pub visible: bool,
    /// Bumped on every map click; a click with the form already open
    /// refocuses the distance field.
    pub click_seq: u64,
    /// False while the post-submit display-restore timer is pending, so the
    /// collapsed form does not replay its slide-in transition.
    pub display_restored: bool,
    pub on_create: Callback<WorkoutDraft>,
}

#[function_component]
pub fn WorkoutForm(props: &Props) -> Html {
    let kind = use_state(|| ActivityKind::Running);
    let distance = use_state(String::new);
    let duration = use_state(String::new);
    let cadence = use_state(String::new);
    let elevation = use_state(String::new);
    let distance_ref = use_node_ref();

    {
        let distance_ref = distance_ref.clone();
        use_effect_with((props.visible, props.click_seq), move |(visible, _)| {
            if *visible {
                if let Some(input) = distance_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
        });
    }

    let on_type_change = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            kind.set(match select.value().as_str() {
                "cycling" => ActivityKind::Cycling,
                _ => ActivityKind::Running,
            });
        })
    };

    let field_input = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };

    let onsubmit = {
        let kind = kind.clone();
        let distance = distance.clone();
        let duration = duration.clone();
        let cadence = cadence.clone();
        let elevation = elevation.clone();
        let on_create = props.on_create.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let extra = match *kind {
                ActivityKind::Running => (*cadence).clone(),
                ActivityKind::Cycling => (*elevation).clone(),
            };

            match form::parse_form(*kind, &distance, &duration, &extra) {
                Ok(draft) => {
                    distance.set(String::new());
                    duration.set(String::new());
                    cadence.set(String::new());
                    elevation.set(String::new());
                    on_create.emit(draft);
                }
                Err(err) => gloo_dialogs::alert(&err.to_string()),
            }
        })
    };

    let form_class = classes!("form", (!props.visible).then_some("hidden"));
    let style = if props.display_restored { "" } else { "display: none;" };

    html! {
        <form class={form_class} {style} {onsubmit}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" onchange={on_type_change}>
                    <option value="running" selected={*kind == ActivityKind::Running}>{"Running"}</option>
                    <option value="cycling" selected={*kind == ActivityKind::Cycling}>{"Cycling"}</option>
                </select>
            </div>
            <div class="form__row">
                <label class="form__label">{"Distance"}</label>
                <input
                    ref={distance_ref}
                    class="form__input form__input--distance"
                    placeholder="km"
                    value={(*distance).clone()}
                    oninput={field_input(&distance)}
                />
            </div>
            <div class="form__row">
                <label class="form__label">{"Duration"}</label>
                <input
                    class="form__input form__input--duration"
                    placeholder="min"
                    value={(*duration).clone()}
                    oninput={field_input(&duration)}
                />
            </div>
            <div class={classes!("form__row", (*kind == ActivityKind::Cycling).then_some("form__row--hidden"))}>
                <label class="form__label">{"Cadence"}</label>
                <input
                    class="form__input form__input--cadence"
                    placeholder="step/min"
                    value={(*cadence).clone()}
                    oninput={field_input(&cadence)}
                />
            </div>
            <div class={classes!("form__row", (*kind == ActivityKind::Running).then_some("form__row--hidden"))}>
                <label class="form__label">{"Elev Gain"}</label>
                <input
                    class="form__input form__input--elevation"
                    placeholder="meters"
                    value={(*elevation).clone()}
                    oninput={field_input(&elevation)}
                />
            </div>
            <button class="form__btn" type="submit">{"OK"}</button>
        </form>
    }
}
