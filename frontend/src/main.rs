use crate::components::{
    map_view::{MapView, PanRequest, Point},
    workout_form::WorkoutForm,
    workout_list::WorkoutList,
};
use chrono::Utc;
use gloo_console::info;
use gloo_timers::callback::Timeout;
use workout_tracker_lib::workout::Workout;
use yew::prelude::*;

use crate::form::WorkoutDraft;

mod components;
mod form;
mod geolocation;
mod storage;

enum Msg {
    LocationFound((f64, f64)),
    LocationUnavailable,
    MapClicked((f64, f64)),
    CreateWorkout(WorkoutDraft),
    SelectWorkout(String),
    RestoreFormDisplay,
}

struct App {
    center: Option<Point>,
    pending_click: Option<(f64, f64)>,
    click_seq: u64,
    workouts: Vec<Workout>,
    pan_to: Option<PanRequest>,
    pan_seq: u64,
    form_display_restored: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let workouts = storage::restore();
        info!(format!("Restored {} workouts", workouts.len()));

        geolocation::request_position(
            ctx.link().callback(Msg::LocationFound),
            ctx.link().callback(|()| Msg::LocationUnavailable),
        );

        Self {
            center: None,
            pending_click: None,
            click_seq: 0,
            workouts,
            pan_to: None,
            pan_seq: 0,
            form_display_restored: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::LocationFound(coords) => {
                self.center = Some(Point(coords.0, coords.1));
                true
            }
            Msg::LocationUnavailable => {
                // The map never mounts; the rest of the app stays usable.
                gloo_dialogs::alert("could not get current position");
                false
            }
            Msg::MapClicked(coords) => {
                self.pending_click = Some(coords);
                self.click_seq += 1;
                true
            }
            Msg::CreateWorkout(draft) => {
                let Some(coords) = self.pending_click.take() else {
                    return false;
                };

                let workout = match draft {
                    WorkoutDraft::Running { distance, duration, cadence } => {
                        Workout::running(coords, distance, duration, cadence, Utc::now())
                    }
                    WorkoutDraft::Cycling { distance, duration, elevation_gain } => {
                        Workout::cycling(coords, distance, duration, elevation_gain, Utc::now())
                    }
                };
                self.workouts.push(workout);
                storage::save(&self.workouts);

                // Keep the collapsed form from replaying its transition.
                self.form_display_restored = false;
                let link = ctx.link().clone();
                Timeout::new(1_000, move || link.send_message(Msg::RestoreFormDisplay)).forget();

                true
            }
            Msg::SelectWorkout(id) => {
                let Some(workout) = self.workouts.iter().find(|workout| workout.id == id) else {
                    return false;
                };

                self.pan_seq += 1;
                self.pan_to = Some(PanRequest {
                    seq: self.pan_seq,
                    target: Point(workout.coords.0, workout.coords.1),
                });
                true
            }
            Msg::RestoreFormDisplay => {
                self.form_display_restored = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="app">
                <div class="sidebar">
                    <WorkoutForm
                        visible={self.pending_click.is_some()}
                        click_seq={self.click_seq}
                        display_restored={self.form_display_restored}
                        on_create={link.callback(Msg::CreateWorkout)}
                    />
                    <WorkoutList
                        workouts={self.workouts.clone()}
                        on_select={link.callback(Msg::SelectWorkout)}
                    />
                </div>
                if let Some(center) = self.center {
                    <MapView
                        center={center}
                        workouts={self.workouts.clone()}
                        pan_to={self.pan_to}
                        on_map_click={link.callback(Msg::MapClicked)}
                    />
                }
            </div>
        }
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
