//! Department (service) model.
//!
//! The facility runs a fixed set of twelve services. Register entries and
//! bulk imports may still carry free-text department values; the enum exists
//! for the known-set listing and for flagging unknown labels at import time.

use serde::{Deserialize, Serialize};

/// The named services of the facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    /// Emergency service ("Urgencias").
    Urgencias,
    /// Intensive care unit ("UCI").
    Uci,
    /// Inpatient ward ("Hospitalización").
    Hospitalizacion,
    /// Surgery ("Cirugía").
    Cirugia,
    /// Outpatient consultation ("Consulta Externa").
    ConsultaExterna,
    /// Clinical laboratory ("Laboratorio").
    Laboratorio,
    /// Diagnostic imaging ("Imágenes Diagnósticas").
    ImagenesDiagnosticas,
    /// Pharmacy ("Farmacia").
    Farmacia,
    /// Dentistry ("Odontología").
    Odontologia,
    /// Pediatrics ("Pediatría").
    Pediatria,
    /// Gynecology and obstetrics ("Ginecología").
    Ginecologia,
    /// Vaccination service ("Vacunación").
    Vacunacion,
}

impl Department {
    /// All known services, in register display order.
    pub const ALL: [Department; 12] = [
        Department::Urgencias,
        Department::Uci,
        Department::Hospitalizacion,
        Department::Cirugia,
        Department::ConsultaExterna,
        Department::Laboratorio,
        Department::ImagenesDiagnosticas,
        Department::Farmacia,
        Department::Odontologia,
        Department::Pediatria,
        Department::Ginecologia,
        Department::Vacunacion,
    ];

    /// Returns the register label for this service.
    pub const fn label(&self) -> &'static str {
        match self {
            Department::Urgencias => "Urgencias",
            Department::Uci => "UCI",
            Department::Hospitalizacion => "Hospitalización",
            Department::Cirugia => "Cirugía",
            Department::ConsultaExterna => "Consulta Externa",
            Department::Laboratorio => "Laboratorio",
            Department::ImagenesDiagnosticas => "Imágenes Diagnósticas",
            Department::Farmacia => "Farmacia",
            Department::Odontologia => "Odontología",
            Department::Pediatria => "Pediatría",
            Department::Ginecologia => "Ginecología",
            Department::Vacunacion => "Vacunación",
        }
    }

    /// Parses a department label into a known service.
    ///
    /// Matching ignores leading/trailing whitespace and ASCII case so that
    /// bulk-import values like `"uci "` resolve. Unknown labels return
    /// `None`; records keep their free-text value either way.
    pub fn parse(raw: &str) -> Option<Department> {
        let trimmed = raw.trim();
        Department::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(trimmed))
    }

    /// Returns true if the label matches one of the known services.
    pub fn is_known(raw: &str) -> bool {
        Department::parse(raw).is_some()
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
