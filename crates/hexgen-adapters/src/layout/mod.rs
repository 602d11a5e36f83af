//! Built-in module layouts.
//!
//! A layout maps (layer, file role) to template text, injected into the
//! generator rather than imported as ambient globals. Exactly one
//! authoritative layout exists per module kind.

pub mod templates;

use hexgen_core::{
    application::CrudLayout,
    domain::{MODULE_DIRECTORIES, TemplateSpec},
};

/// The CRUD module layout shipped with the tool.
///
/// Thirteen layer files plus the per-action use case templates, laid out as:
///
/// ```text
/// domain/{models,repository,exceptions,dtos,unit_of_work}.py
/// application/{schemas,service,handlers,interfaces,mappers}.py
/// application/use_cases/{__init__,<action>}.py
/// infrastructure/{web,database,unit_of_work}.py
/// ```
pub fn crud_layout() -> CrudLayout {
    CrudLayout {
        directories: MODULE_DIRECTORIES.iter().map(|d| d.to_string()).collect(),
        routes: vec![
            TemplateSpec::new("infrastructure/web.py", templates::INFRASTRUCTURE_WEB),
            TemplateSpec::new("infrastructure/database.py", templates::INFRASTRUCTURE_DATABASE),
            TemplateSpec::new(
                "infrastructure/unit_of_work.py",
                templates::INFRASTRUCTURE_UNIT_OF_WORK,
            ),
            TemplateSpec::new("domain/exceptions.py", templates::DOMAIN_EXCEPTIONS),
            TemplateSpec::new("domain/models.py", templates::DOMAIN_MODELS),
            TemplateSpec::new("domain/repository.py", templates::DOMAIN_REPOSITORY),
            TemplateSpec::new("domain/dtos.py", templates::DOMAIN_DTOS),
            TemplateSpec::new("domain/unit_of_work.py", templates::DOMAIN_UNIT_OF_WORK),
            TemplateSpec::new("application/service.py", templates::APPLICATION_SERVICE),
            TemplateSpec::new("application/schemas.py", templates::APPLICATION_SCHEMAS),
            TemplateSpec::new("application/handlers.py", templates::APPLICATION_HANDLERS),
            TemplateSpec::new("application/mappers.py", templates::APPLICATION_MAPPERS),
            TemplateSpec::new("application/interfaces.py", templates::APPLICATION_INTERFACES),
        ],
        use_case_init: templates::USE_CASE_INIT.to_string(),
        use_case: templates::USE_CASE.to_string(),
    }
}
