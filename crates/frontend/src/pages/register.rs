use crate::auth::use_auth;
use chrono::NaiveDate;
use clinic_core::Role;
use clinic_frontend_common::AuthSuccess;
use clinic_http::{Gender, RegisterPatientRequest};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

/// Raw form values, as typed
#[derive(Clone, Debug, Default, PartialEq)]
struct RegisterForm {
    username: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    dob: String,
    gender: String,
    phone: String,
    blood_group: String,
    address: String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl RegisterForm {
    /// Only the date and gender are checked here; the server validates the rest
    fn to_request(&self) -> Result<RegisterPatientRequest, String> {
        let dob = NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d")
            .map_err(|_| "Enter a valid date of birth".to_string())?;
        let gender = match self.gender.as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            "other" => Gender::Other,
            _ => return Err("Select a gender".to_string()),
        };

        Ok(RegisterPatientRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            dob,
            gender,
            phone: self.phone.trim().to_string(),
            blood_group: optional(&self.blood_group),
            address: optional(&self.address),
            emergency_contact_name: None,
            emergency_contact_phone: None,
            medical_history: None,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Username,
    Email,
    Password,
    FirstName,
    LastName,
    Dob,
    Gender,
    Phone,
    BloodGroup,
    Address,
}

const FIELDS: [(Field, &str, &str); 10] = [
    (Field::Username, "Username", "text"),
    (Field::Email, "Email", "email"),
    (Field::Password, "Password", "password"),
    (Field::FirstName, "First name", "text"),
    (Field::LastName, "Last name", "text"),
    (Field::Dob, "Date of birth", "date"),
    (Field::Gender, "Gender (male, female, other)", "text"),
    (Field::Phone, "Phone", "tel"),
    (Field::BloodGroup, "Blood group (optional)", "text"),
    (Field::Address, "Address (optional)", "text"),
];

/// Form actions
enum RegisterAction {
    Set(Field, String),
}

impl Reducible for RegisterForm {
    type Action = RegisterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let RegisterAction::Set(field, value) = action;
        let mut next = (*self).clone();
        match field {
            Field::Username => next.username = value,
            Field::Email => next.email = value,
            Field::Password => next.password = value,
            Field::FirstName => next.first_name = value,
            Field::LastName => next.last_name = value,
            Field::Dob => next.dob = value,
            Field::Gender => next.gender = value.to_lowercase(),
            Field::Phone => next.phone = value,
            Field::BloodGroup => next.blood_group = value,
            Field::Address => next.address = value,
        }
        Rc::new(next)
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let form = use_reducer(RegisterForm::default);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let store = auth.store.clone();
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.to_request() {
                Ok(request) => request,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let store = store.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let target = match store.register(&request).await {
                    Ok(AuthSuccess::LoggedIn(role)) => role.dashboard_path(),
                    Ok(AuthSuccess::Registered) => Role::Patient.login_path(),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        return;
                    }
                };
                error.set(None);
                if let Some(navigator) = navigator {
                    navigator.push(&AnyRoute::new(target));
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4 py-10">
            <div class="max-w-lg w-full bg-white rounded-lg shadow-lg p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Patient registration"}</h1>
                if let Some(message) = (*error).clone() {
                    <div class="mb-4 p-3 rounded-md bg-red-50 text-red-700 text-sm">{message}</div>
                }
                <form onsubmit={on_submit} class="flex flex-col gap-3">
                    { for FIELDS.iter().map(|&(field, label, kind)| {
                        let dispatcher = form.dispatcher();
                        let oninput = Callback::from(move |e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            dispatcher.dispatch(RegisterAction::Set(field, input.value()));
                        });
                        html! {
                            <input
                                type={kind}
                                placeholder={label}
                                {oninput}
                                class="px-3 py-2 border border-gray-300 rounded-md"
                            />
                        }
                    }) }
                    <button
                        type="submit"
                        disabled={auth.session.loading}
                        class="mt-2 px-4 py-2 text-white bg-blue-600 hover:bg-blue-700 rounded-md disabled:opacity-50"
                    >
                        {"Create account"}
                    </button>
                </form>
                <p class="mt-6 text-sm text-center text-gray-600">
                    {"Already registered? "}
                    <Link<AnyRoute> to={AnyRoute::new(Role::Patient.login_path())} classes="text-blue-600 hover:underline">
                        {"Sign in"}
                    </Link<AnyRoute>>
                </p>
            </div>
        </div>
    }
}
