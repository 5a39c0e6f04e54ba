use crate::components::screen_header::ScreenHeader;
use spotlight_core::profile::{after_save, back_target};
use spotlight_core::{FormMode, NavCommand, NavParams, ProfileDraft, ScreenId, UserRole};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoginSignupPageProps {
    pub on_navigate: Callback<NavCommand>,
    pub return_to: Option<ScreenId>,
}

#[function_component(LoginSignupPage)]
pub fn login_signup_page(props: &LoginSignupPageProps) -> Html {
    let signing_up = use_state(|| false);
    let toggle = {
        let signing_up = signing_up.clone();
        Callback::from(move |_| signing_up.set(!*signing_up))
    };
    // Credentials go to the identity service; a successful sign-in continues
    // to role selection.
    let onsubmit = {
        let cb = props.on_navigate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(NavCommand::to(ScreenId::RoleSelection));
        })
    };
    let back = NavCommand::to(props.return_to.unwrap_or(ScreenId::PublicHome));
    let (title, submit, switch) = if *signing_up {
        ("Create Account", "Sign Up", "Already have an account? Sign in")
    } else {
        ("Welcome Back", "Sign In", "New here? Create an account")
    };

    html! {
        <section class="login-signup">
            <ScreenHeader title={title} {back} on_navigate={props.on_navigate.clone()} />
            <form class="auth-form" {onsubmit}>
                <label for="auth-email">{ "Email" }</label>
                <input id="auth-email" type="email" autocomplete="email" required={true} />
                <label for="auth-password">{ "Password" }</label>
                <input id="auth-password" type="password" autocomplete="current-password" required={true} />
                <button type="submit" class="btn btn-primary">{ submit }</button>
            </form>
            <button type="button" class="btn btn-ghost" onclick={toggle}>{ switch }</button>
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct RoleSelectionPageProps {
    pub on_navigate: Callback<NavCommand>,
    pub on_choose_role: Callback<UserRole>,
}

const fn role_blurb(role: UserRole) -> (&'static str, &'static str) {
    match role {
        UserRole::Artist => ("I'm an Artist", "Showcase your talent and get booked"),
        UserRole::Organizer => ("I'm an Organizer", "Find and book artists for your events"),
        UserRole::Public => ("I'm a Fan", "Discover artists and live events"),
        UserRole::Admin => ("Admin", "Moderate the platform"),
    }
}

#[function_component(RoleSelectionPage)]
pub fn role_selection_page(props: &RoleSelectionPageProps) -> Html {
    let choose = |role: UserRole, next: NavCommand| {
        let on_choose_role = props.on_choose_role.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            on_choose_role.emit(role);
            on_navigate.emit(next.clone());
        })
    };
    let cards = [UserRole::Artist, UserRole::Organizer, UserRole::Public]
        .into_iter()
        .map(|role| {
            let (title, blurb) = role_blurb(role);
            let onclick = choose(
                role,
                NavCommand::with(
                    ScreenId::ProfileSetup,
                    NavParams::new().with_mode(FormMode::Setup),
                ),
            );
            html! {
                <button type="button" class="role-card" id={format!("role-{role}")} {onclick}>
                    <strong>{ title }</strong>
                    <span>{ blurb }</span>
                </button>
            }
        });
    let admin = choose(UserRole::Admin, NavCommand::to(ScreenId::AdminDashboard));
    let skip = {
        let cb = props.on_navigate.clone();
        Callback::from(move |_| cb.emit(NavCommand::to(ScreenId::PublicHome)))
    };

    html! {
        <section class="role-selection">
            <ScreenHeader title="Join Spotlight" subtitle={AttrValue::from("How will you use Spotlight?")} on_navigate={props.on_navigate.clone()} />
            <div class="role-cards">{ for cards }</div>
            <button type="button" class="btn btn-ghost btn-sm" onclick={admin}>{ "Admin access" }</button>
            <button type="button" class="link" onclick={skip}>{ "Skip for now" }</button>
        </section>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ProfileFormPageProps {
    pub on_navigate: Callback<NavCommand>,
    pub role: UserRole,
    pub mode: FormMode,
    pub return_to: Option<ScreenId>,
}

fn text_input(
    id: &'static str,
    label: &'static str,
    draft: &UseStateHandle<ProfileDraft>,
    field: fn(&mut ProfileDraft) -> &mut String,
    read: fn(&ProfileDraft) -> &String,
) -> Html {
    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            *field(&mut next) = input.value();
            draft.set(next);
        })
    };
    html! {
        <>
            <label for={id}>{ label }</label>
            <input id={id} type="text" value={read(draft).clone()} {oninput} />
        </>
    }
}

#[function_component(ProfileFormPage)]
pub fn profile_form_page(props: &ProfileFormPageProps) -> Html {
    let draft = use_state(ProfileDraft::default);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let draft = draft.clone();
        let error = error.clone();
        let cb = props.on_navigate.clone();
        let (role, mode, return_to) = (props.role, props.mode, props.return_to);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate(role) {
                Ok(profile) => {
                    log::debug!("profile saved for {}", profile.display_name);
                    error.set(None);
                    cb.emit(after_save(mode, return_to));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let title = if props.mode == FormMode::Edit {
        "Edit Profile"
    } else {
        "Set Up Your Profile"
    };
    let name_field = if props.role == UserRole::Organizer {
        text_input("profile-company", "Company name", &draft, |d| &mut d.company, |d| &d.company)
    } else {
        text_input("profile-name", "Display name", &draft, |d| &mut d.display_name, |d| &d.display_name)
    };

    html! {
        <section class="profile-form">
            <ScreenHeader
                title={title}
                back={back_target(props.mode, props.return_to)}
                on_navigate={props.on_navigate.clone()}
            />
            <form {onsubmit}>
                { name_field }
                { text_input("profile-username", "Username", &draft, |d| &mut d.username, |d| &d.username) }
                { text_input("profile-city", "City", &draft, |d| &mut d.city, |d| &d.city) }
                { text_input("profile-bio", "Bio", &draft, |d| &mut d.bio, |d| &d.bio) }
                if props.role == UserRole::Artist {
                    { text_input("profile-genres", "Genres (comma separated)", &draft, |d| &mut d.genres, |d| &d.genres) }
                }
                if let Some(message) = (*error).clone() {
                    <p class="form-error" role="alert">{ message }</p>
                }
                <button type="submit" class="btn btn-primary">{ "Save" }</button>
            </form>
        </section>
    }
}
