use yew::prelude::*;

use shared::models::User;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: User,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout = props.on_logout.clone();
    let logout = Callback::from(move |_: MouseEvent| {
        on_logout.emit(());
    });

    html! {
        <header class="header">
            <div class="container">
                <h1>{ "Daybook" }</h1>
                <div class="identity">
                    <img class="avatar" src={props.user.avatar_url.clone()} alt="" />
                    <span class="user-name">{ &props.user.name }</span>
                    <button class="logout-btn" onclick={logout}>{ "Log out" }</button>
                </div>
            </div>
        </header>
    }
}
