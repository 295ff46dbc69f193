//! Repository binding injection into `RepositoriesServiceProvider`

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use super::{InjectionError, manual, write_file};
use crate::core::ProjectLayout;
use crate::generation::{BindingRegistrar, BindingReport, EntityName, InjectionOutcome};
use crate::infrastructure::templates::{Stub, TemplateStore};

/// Entry registering the provider with the application
pub const PROVIDER_ENTRY: &str = "App\\Providers\\RepositoriesServiceProvider::class";

/// Signature and opening brace of the `register` method
static REGISTER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"public\s+function\s+register\s*\(\)(?:\s*:\s*void)?\s*\{")
        .expect("register pattern is valid")
});

/// Contextual binding of the entity's service to its repository
pub fn binding_code(entity: &EntityName) -> String {
    let name = entity.pascal();
    format!(
        "        $this->app->when(\\App\\Services\\{name}Service::class)\n            ->needs(\\App\\Contracts\\RepositoryInterface::class)\n            ->give(\\App\\Repositories\\{name}Repository::class);"
    )
}

/// Append `binding` to the body of `register`, or `None` if there is no such method
pub fn splice_binding(content: &str, binding: &str) -> Option<String> {
    let open = REGISTER_RE.find(content)?;
    let close = matching_brace(content, open.end())?;
    let body = content[open.end()..close].trim_end();

    Some(format!(
        "{}{body}\n{binding}\n    }}{}",
        &content[..open.end()],
        &content[close + 1..]
    ))
}

/// Byte offset of the `}` closing a block whose body starts at `start`
fn matching_brace(content: &str, start: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, c) in content[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Insert the provider entry right after the first `return [`
pub fn insert_provider_entry(content: &str) -> Option<String> {
    let anchor = "return [";
    let at = content.find(anchor)? + anchor.len();
    Some(format!(
        "{}\n    {PROVIDER_ENTRY},{}",
        &content[..at],
        &content[at..]
    ))
}

/// Patches the service provider and the provider list
pub struct BindingInjector {
    layout: ProjectLayout,
    templates: Box<dyn TemplateStore>,
}

impl BindingInjector {
    pub fn new(layout: ProjectLayout, templates: Box<dyn TemplateStore>) -> Self {
        Self { layout, templates }
    }

    fn inject_binding(&self, binding: &str) -> InjectionOutcome {
        let path = self.layout.service_provider();
        self.try_inject_binding(&path, binding)
            .unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Binding must be added manually");
                manual(&path, &e, vec![binding.to_string()])
            })
    }

    fn try_inject_binding(
        &self,
        path: &Path,
        binding: &str,
    ) -> Result<InjectionOutcome, InjectionError> {
        let (content, existed) = match fs::read_to_string(path) {
            Ok(content) => (content, true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Provider missing, rendering from stub");
                (self.templates.resolve(Stub::RepositoriesServiceProvider)?, false)
            }
            Err(e) => return Err(InjectionError::io(path, e)),
        };

        if content.contains(binding) {
            debug!(path = %path.display(), "Binding already present");
            return Ok(InjectionOutcome::Unchanged {
                path: path.to_path_buf(),
            });
        }

        let updated = splice_binding(&content, binding).ok_or_else(|| {
            InjectionError::RegisterHookNotFound {
                path: path.to_path_buf(),
            }
        })?;
        write_file(path, &updated)?;

        info!(path = %path.display(), "Added repository binding");
        let path = path.to_path_buf();
        Ok(if existed {
            InjectionOutcome::Updated { path }
        } else {
            InjectionOutcome::Created { path }
        })
    }

    fn register_provider(&self) -> InjectionOutcome {
        let path = self.layout.providers_file();
        self.try_register_provider(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Provider must be registered manually");
            manual(path, &e, vec![format!("{PROVIDER_ENTRY},")])
        })
    }

    fn try_register_provider(&self, path: &Path) -> Result<InjectionOutcome, InjectionError> {
        let content = fs::read_to_string(path).map_err(|e| InjectionError::io(path, e))?;

        if content.contains(PROVIDER_ENTRY) {
            return Ok(InjectionOutcome::Unchanged {
                path: path.to_path_buf(),
            });
        }

        let updated =
            insert_provider_entry(&content).ok_or_else(|| InjectionError::ProviderListNotFound {
                path: path.to_path_buf(),
            })?;
        fs::write(path, updated).map_err(|e| InjectionError::io(path, e))?;

        info!(path = %path.display(), "Registered RepositoriesServiceProvider");
        Ok(InjectionOutcome::Updated {
            path: path.to_path_buf(),
        })
    }
}

impl BindingRegistrar for BindingInjector {
    fn inject(&self, entity: &EntityName) -> BindingReport {
        let binding = binding_code(entity);
        BindingReport {
            provider: self.inject_binding(&binding),
            registration: self.register_provider(),
        }
    }
}
