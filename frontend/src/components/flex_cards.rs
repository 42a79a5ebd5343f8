use yew::prelude::*;

struct FeaturedDestination {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const FEATURED: [FeaturedDestination; 4] = [
    FeaturedDestination {
        title: "Great Wall of China",
        description: "An ancient series of walls and fortifications, the Great Wall stretches across northern China.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRc3QJGKLAIqUpr3AIM2L9wiPOf-StXRKBgqw&s",
    },
    FeaturedDestination {
        title: "Christ the Redeemer",
        description: "A colossal statue of Jesus Christ in Rio de Janeiro, Brazil, symbolizing peace and welcoming.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTowzxEbT9PVCIPEasewys8l-cDCKyMTPOk5Q&s",
    },
    FeaturedDestination {
        title: "Machu Picchu",
        description: "An ancient Incan city set high in the Andes Mountains in Peru, known for its archaeological significance.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQwFexZrjZPGcMJBZlz-B0paa3MpRojdZRglA&s",
    },
    FeaturedDestination {
        title: "Colosseum",
        description: "An iconic symbol of Imperial Rome, this ancient amphitheater is renowned for its architectural grandeur.",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR7RdM_gGUlQZaE9Ivq1vta0lGUT6PRn0C4uQ&s",
    },
];

/// Inspiration strip: one featured destination expanded at a time.
#[function_component]
pub fn FlexCards() -> Html {
    let active = use_state(|| 0usize);

    html! {
        <div class="suggest-section">
            <div class="wrapper">
                <div class="container">
                    { for FEATURED.iter().enumerate().map(|(index, card)| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(index))
                        };
                        html! {
                            <div
                                key={index}
                                class={classes!("card", (*active == index).then_some("active"))}
                                style={format!("background-image: url({})", card.image)}
                                {onclick}
                            >
                                <div class="row">
                                    <div class="description">
                                        <h4>{card.title}</h4>
                                        <p>{card.description}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}
