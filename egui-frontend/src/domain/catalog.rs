//! The static subject catalog.
//!
//! One ordered list of (code, name) pairs, created once at startup and
//! immutable for the process lifetime. The subject selector is populated
//! straight from this list.

use shared::Subject;

/// Placeholder label for the empty selector entry.
pub const PLACEHOLDER_LABEL: &str = "-- Seleccione materia (o deje vacío) --";

/// The static, ordered subject catalog.
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    /// Build the catalog with its fixed subject list.
    pub fn new() -> Self {
        let subjects = vec![
            Subject::new("ALG501", "Álgebra Vectorial y Matrices"),
            Subject::new("ANF231", "Antropología Filosófica"),
            Subject::new("LME404", "Lenguajes de Marcado y Estilo Web"),
            Subject::new("PAL404", "Programación de Algoritmos"),
            Subject::new("REC404", "Redes de Comunicación"),
            Subject::new("ASB404", "Análisis y Diseño de Sistemas y Base de Datos"),
            Subject::new(
                "DAW404",
                "Desarrollo de Aplic. Web con Soft. Interpret. en el Cliente",
            ),
            Subject::new(
                "DSP404",
                "Desarrollo de Aplicaciones con Software Propietario",
            ),
            Subject::new("POO404", "Programación Orientada a Objetos"),
            Subject::new("PSC231", "Pensamiento Social Cristiano"),
            Subject::new("ASN441", "Administración de Servicios en la Nube"),
            Subject::new(
                "DPS441",
                "Diseño y Programación de Software Multiplataforma",
            ),
            Subject::new(
                "DSS404",
                "Desarrollo de Aplic. Web con Soft. Interpret. en el Servidor",
            ),
            Subject::new("DWF404", "Desarrollo de Aplicaciones con Web Frameworks"),
            Subject::new("SPP404", "Servidores en Plataformas Propietarias"),
            Subject::new("APR404", "Administración de Proyectos"),
            Subject::new("DSM441", "Desarrollo de Software para Móviles"),
            Subject::new("EAI441", "Electrónica Aplicada al Internet de las Cosas"),
            Subject::new("SDR404", "Seguridad de Redes"),
            Subject::new("SPL404", "Servidores en Plataformas Libres"),
        ];

        Self { subjects }
    }

    /// The full catalog, in declaration order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Look up a subject by code. Unknown codes are not an error.
    pub fn find(&self, code: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.code == code)
    }

    /// Selector entries: the placeholder (empty value) followed by one
    /// `(code, "<code> — <name>")` entry per subject. The subject
    /// selector is populated from exactly this list.
    pub fn selector_entries(&self) -> Vec<(Option<String>, String)> {
        let mut entries = Vec::with_capacity(self.subjects.len() + 1);
        entries.push((None, PLACEHOLDER_LABEL.to_string()));
        entries.extend(
            self.subjects
                .iter()
                .map(|s| (Some(s.code.clone()), s.option_label())),
        );
        entries
    }
}

impl Default for SubjectCatalog {
    fn default() -> Self {
        Self::new()
    }
}
