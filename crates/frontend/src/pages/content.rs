//! Page bodies inside a role layout
//!
//! The clinical screens themselves live behind their own API calls; here each
//! view gets its heading and the data it was routed with.

use clinic_core::{ResolvedRoute, View};
use yew::prelude::*;

fn title(view: View) -> &'static str {
    match view {
        View::AdminLayout | View::AdminDashboard => "Admin dashboard",
        View::DepartmentList => "Departments",
        View::DoctorList => "Doctors",
        View::PatientList => "Patients",
        View::AppointmentList => "Appointments",
        View::DoctorLayout | View::DoctorDashboard => "Doctor dashboard",
        View::DoctorAppointments => "My appointments",
        View::DoctorPatients => "My patients",
        View::DoctorPatientDetails => "Patient details",
        View::DoctorSchedule => "Schedule",
        View::DoctorProfile | View::PatientProfile => "Profile",
        View::PatientLayout | View::PatientDashboard => "Patient dashboard",
        View::PatientDoctors => "Find a doctor",
        View::PatientAppointments => "Appointments",
        View::PatientRecords => "Medical records",
        View::Landing => "Clinic Portal",
        View::Login => "Sign in",
        View::Register => "Register",
    }
}

/// Body for a resolved route inside its role layout
pub fn view_content(route: &ResolvedRoute) -> Html {
    html! {
        <section>
            <h1 class="text-2xl font-bold text-gray-900">{ title(route.view) }</h1>
            if let Some(id) = route.param("id") {
                <p class="mt-2 text-sm text-gray-500">{format!("Record #{id}")}</p>
            }
        </section>
    }
}
