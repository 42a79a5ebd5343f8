use yew::prelude::*;

pub const RATING_ICON: &str = "https://cdn-icons-png.flaticon.com/512/276/276020.png";

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub description: AttrValue,
    pub image: AttrValue,
    pub rating: AttrValue,
    pub selected: bool,
    pub on_select: Callback<()>,
    pub on_details: Callback<()>,
}

#[function_component]
pub fn PlaceCard(props: &Props) -> Html {
    let on_details = props.on_details.reform(|_: MouseEvent| ());
    let on_select = props.on_select.reform(|_: Event| ());

    html! {
        <div class={classes!("card", props.selected.then_some("selected"))}>
            <img src={props.image.clone()} alt={props.title.clone()} />
            <div class="card-content">
                <div class="desc">
                    <h3>{props.title.clone()}</h3>
                    <p>{props.description.clone()}</p>
                </div>
                <div class="rating">
                    <p>{format!("Rated at {}", props.rating)}</p>
                    <img class="rating-icon" src={RATING_ICON} />
                </div>
                <button onclick={on_details} class="details-button">{"View Details"}</button>
                <label class="select-place">
                    <input type="checkbox" checked={props.selected} onchange={on_select} />
                    {"Add to Visit"}
                </label>
            </div>
        </div>
    }
}
