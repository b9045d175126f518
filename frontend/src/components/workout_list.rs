use workout_tracker_lib::workout::{ActivityDetails, Workout};
use yew::prelude::*;

use crate::components::map_view::activity_icon;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub workouts: Vec<Workout>,
    pub on_select: Callback<String>,
}

/// The logged sessions, in creation order. Entries emit their workout id
/// when clicked; clicks anywhere else in the list land on no entry.
#[function_component]
pub fn WorkoutList(props: &Props) -> Html {
    html! {
        <ul class="workouts">
            { for props.workouts.iter().map(|workout| workout_entry(workout, &props.on_select)) }
        </ul>
    }
}

fn workout_entry(workout: &Workout, on_select: &Callback<String>) -> Html {
    let id = workout.id.clone();
    let on_select = on_select.clone();
    let onclick = Callback::from(move |_| on_select.emit(id.clone()));

    let (metric, metric_unit, extra_icon, extra, extra_unit) = match &workout.details {
        ActivityDetails::Running { cadence, pace } => {
            (format!("{pace:.1}"), "min/km", "🦶🏼", format!("{cadence}"), "spm")
        }
        ActivityDetails::Cycling { elevation_gain, speed } => {
            (format!("{speed:.1}"), "km/h", "⛰", format!("{elevation_gain}"), "m")
        }
    };

    html! {
        <li class={classes!("workout", format!("workout--{}", workout.kind().tag()))} {onclick}>
            <h2 class="workout__title">{ &workout.description }</h2>
            <div class="workout__details">
                <span class="workout__icon">{ activity_icon(workout.kind()) }</span>
                <span class="workout__value">{ workout.distance }</span>
                <span class="workout__unit">{"km"}</span>
            </div>
            <div class="workout__details">
                <span class="workout__icon">{"⏱"}</span>
                <span class="workout__value">{ workout.duration }</span>
                <span class="workout__unit">{"min"}</span>
            </div>
            <div class="workout__details">
                <span class="workout__icon">{"⚡️"}</span>
                <span class="workout__value">{ metric }</span>
                <span class="workout__unit">{ metric_unit }</span>
            </div>
            <div class="workout__details">
                <span class="workout__icon">{ extra_icon }</span>
                <span class="workout__value">{ extra }</span>
                <span class="workout__unit">{ extra_unit }</span>
            </div>
        </li>
    }
}
