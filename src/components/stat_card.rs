use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub amount: String,
    pub color: &'static str,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let class_name = format!("p-5 rounded-xl text-center shadow-md text-white {}", props.color);
    html! {
        <div class={class_name}>
            <h3 class="text-sm font-medium">{ props.title }</h3>
            <p class="text-2xl font-semibold mt-2">{ props.amount.clone() }</p>
        </div>
    }
}
