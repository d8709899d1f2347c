//! Static route tree of the clinic application

use crate::role::Role;

/// View rendered for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Landing,
    Login,
    Register,

    AdminLayout,
    AdminDashboard,
    DepartmentList,
    DoctorList,
    PatientList,
    AppointmentList,

    DoctorLayout,
    DoctorDashboard,
    DoctorAppointments,
    DoctorPatients,
    DoctorPatientDetails,
    DoctorSchedule,
    DoctorProfile,

    PatientLayout,
    PatientDashboard,
    PatientDoctors,
    PatientAppointments,
    PatientRecords,
    PatientProfile,
}

/// One node of the route tree. Child paths are relative to their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub required_role: Option<Role>,
    pub children: &'static [RouteEntry],
}

impl RouteEntry {
    const fn public(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name,
            view,
            required_role: None,
            children: &[],
        }
    }

    const fn gated(
        path: &'static str,
        name: &'static str,
        view: View,
        role: Role,
        children: &'static [RouteEntry],
    ) -> Self {
        Self {
            path,
            name,
            view,
            required_role: Some(role),
            children,
        }
    }

    /// Path pattern split into non-empty segments
    pub fn segments(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }
}

static ADMIN_CHILDREN: [RouteEntry; 5] = [
    RouteEntry::public("dashboard", "admin-dashboard", View::AdminDashboard),
    RouteEntry::public("departments", "department-list", View::DepartmentList),
    RouteEntry::public("doctors", "doctor-list", View::DoctorList),
    RouteEntry::public("patients", "patient-list", View::PatientList),
    RouteEntry::public("appointments", "appointment-list", View::AppointmentList),
];

static DOCTOR_CHILDREN: [RouteEntry; 6] = [
    RouteEntry::public("dashboard", "doctor-dashboard", View::DoctorDashboard),
    RouteEntry::public("appointments", "doctor-appointments", View::DoctorAppointments),
    RouteEntry::public("patients", "doctor-patients", View::DoctorPatients),
    RouteEntry::public(
        "patients/:id",
        "doctor-patient-details",
        View::DoctorPatientDetails,
    ),
    RouteEntry::public("schedule", "doctor-schedule", View::DoctorSchedule),
    RouteEntry::public("profile", "doctor-profile", View::DoctorProfile),
];

static PATIENT_CHILDREN: [RouteEntry; 5] = [
    RouteEntry::public("dashboard", "patient-dashboard", View::PatientDashboard),
    RouteEntry::public("doctors", "patient-doctors", View::PatientDoctors),
    RouteEntry::public("appointments", "patient-appointments", View::PatientAppointments),
    RouteEntry::public("records", "patient-records", View::PatientRecords),
    RouteEntry::public("profile", "patient-profile", View::PatientProfile),
];

static ROUTES: [RouteEntry; 6] = [
    RouteEntry::public("/", "landing", View::Landing),
    RouteEntry::public("/login/:role", "login", View::Login),
    RouteEntry::public("/register", "register", View::Register),
    RouteEntry::gated(
        "/admin",
        "admin",
        View::AdminLayout,
        Role::Admin,
        &ADMIN_CHILDREN,
    ),
    RouteEntry::gated(
        "/doctor",
        "doctor",
        View::DoctorLayout,
        Role::Doctor,
        &DOCTOR_CHILDREN,
    ),
    RouteEntry::gated(
        "/patient",
        "patient",
        View::PatientLayout,
        Role::Patient,
        &PATIENT_CHILDREN,
    ),
];

/// Top-level route entries
pub fn route_table() -> &'static [RouteEntry] {
    &ROUTES
}
