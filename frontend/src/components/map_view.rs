use std::collections::HashMap;

use gloo_utils::document;
use leaflet::{
    LatLng, Map, MapOptions, Marker, MouseEvents, Popup, PopupOptions, TileLayer,
    TileLayerOptions,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};
use workout_tracker_lib::workout::{ActivityKind, Workout};
use yew::prelude::*;

const MAP_ZOOM: f64 = 13.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub f64, pub f64);

/// Request to animate the map to a workout's location. The sequence number
/// makes repeated clicks on the same entry distinguishable in the props diff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanRequest {
    pub seq: u64,
    pub target: Point,
}

pub struct MapView {
    map: Map,
    container: HtmlElement,
    markers: HashMap<String, Marker>,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub center: Point,
    pub workouts: Vec<Workout>,
    pub pan_to: Option<PanRequest>,
    pub on_map_click: Callback<(f64, f64)>,
}

impl MapView {
    fn render_map(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }

    fn add_missing_markers(&mut self, workouts: &[Workout]) {
        for workout in workouts {
            if !self.markers.contains_key(&workout.id) {
                let marker = place_marker(&self.map, workout);
                self.markers.insert(workout.id.clone(), marker);
            }
        }
    }
}

impl Component for MapView {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        let container: Element = document().create_element("div").unwrap();
        let container: HtmlElement = container.dyn_into().unwrap();
        container.set_class_name("map");

        let leaflet_map = Map::new_with_element(&container, &MapOptions::default());

        Self {
            map: leaflet_map,
            container,
            markers: HashMap::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let center = ctx.props().center;
            self.map.set_view(&LatLng::new(center.0, center.1), MAP_ZOOM);
            add_tile_layer(&self.map);

            let on_click = ctx.props().on_map_click.clone();
            self.map.on_mouse_click(Box::new(move |event| {
                let latlng = event.lat_lng();
                on_click.emit((latlng.lat(), latlng.lng()));
            }));

            // Markers for the log restored from storage.
            let workouts = ctx.props().workouts.clone();
            self.add_missing_markers(&workouts);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        self.map.invalidate_size(false);
        let props = ctx.props();

        let workouts = props.workouts.clone();
        self.add_missing_markers(&workouts);

        if props.pan_to != old_props.pan_to {
            if let Some(request) = props.pan_to {
                self.map
                    .fly_to(&LatLng::new(request.target.0, request.target.1), MAP_ZOOM);
            }
        }

        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="map-wrapper">
                {self.render_map()}
            </div>
        }
    }
}

pub fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Running => "🏃‍♂️",
        ActivityKind::Cycling => "🚴‍♀️",
    }
}

fn place_marker(map: &Map, workout: &Workout) -> Marker {
    let marker = Marker::new(&LatLng::new(workout.coords.0, workout.coords.1));
    marker.add_to(map);

    let opts = PopupOptions::default();
    opts.set_max_width(250.0);
    opts.set_min_width(100.0);
    opts.set_auto_close(false);
    opts.set_close_on_click(false);
    opts.set_class_name(format!("{}-popup", workout.kind().tag()));

    let popup = Popup::new(&opts, None);
    popup.set_content(
        &format!("{} {}", activity_icon(workout.kind()), workout.description).into(),
    );

    marker.bind_popup(&popup);
    marker.open_popup();

    marker
}

fn add_tile_layer(map: &Map) {
    let url = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
    let opts = TileLayerOptions::new();
    opts.set_attribution(
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            .to_string(),
    );
    opts.set_update_when_idle(true);
    TileLayer::new_options(url, &opts).add_to(map);
}
