use crate::models::climate::ClimateSnapshot;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HumidityTrendsProps {
    pub snapshot: Rc<ClimateSnapshot>,
}

/// Region-by-region humidity direction; renders nothing when the server sent none
#[function_component(HumidityTrends)]
pub fn humidity_trends(props: &HumidityTrendsProps) -> Html {
    let trends = props.snapshot.humidity();

    if trends.is_empty() {
        return html! {};
    }

    html! {
        <div class="humidity-trends">
            <h3>{"Humidity Trends"}</h3>
            <table class="humidity-table">
                <tbody>
                    {
                        trends.iter().map(|t| html! {
                            <tr key={t.region.clone()}>
                                <th scope="row">{&t.region}</th>
                                <td>{&t.trend}</td>
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}
