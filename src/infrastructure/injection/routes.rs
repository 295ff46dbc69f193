//! Resource route injection into the routes file
//!
//! The routes file is not edited in place. It is parsed into import and route lines and
//! rebuilt from them, so running the injection twice yields the same bytes.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use super::{InjectionError, manual, write_file};
use crate::core::ProjectLayout;
use crate::generation::{EntityName, InjectionOutcome, RouteRegistrar};

pub const ROUTE_IMPORT: &str = "use Illuminate\\Support\\Facades\\Route;";

/// One non-blank line of a routes file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutesLine {
    Import(String),
    Route(String),
    Other(String),
}

impl RoutesLine {
    /// Classify a line; blank lines yield `None`
    pub fn classify(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            None
        } else if line.starts_with("use ") && line.contains(';') {
            Some(RoutesLine::Import(line.to_string()))
        } else if line.starts_with("Route::") {
            Some(RoutesLine::Route(line.to_string()))
        } else {
            Some(RoutesLine::Other(line.to_string()))
        }
    }
}

/// The `use ...;` statement of an import line, without any trailing comment
fn import_statement(line: &str) -> &str {
    line.find(';').map_or(line, |end| &line[..=end])
}

/// Result of rebuilding a routes file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuiltRoutes {
    pub content: String,
    /// False when an identical route line was already declared
    pub route_added: bool,
}

/// Rebuild `existing` with the route import, `controller_import` and `route_line`.
/// Lines that are neither imports nor routes are dropped.
pub fn rebuild_routes(existing: &str, controller_import: &str, route_line: &str) -> RebuiltRoutes {
    let body = existing.trim();
    let body = body.strip_prefix("<?php").unwrap_or(body);
    let body = body.trim_end();
    let body = body.strip_suffix("?>").unwrap_or(body);

    let mut imports: Vec<String> = Vec::new();
    let mut routes: Vec<String> = Vec::new();
    for line in body.lines().filter_map(RoutesLine::classify) {
        match line {
            RoutesLine::Import(import) => {
                let statement = import_statement(&import);
                if statement != ROUTE_IMPORT
                    && statement != controller_import
                    && !imports.iter().any(|seen| import_statement(seen) == statement)
                {
                    imports.push(import);
                }
            }
            RoutesLine::Route(route) => routes.push(route),
            RoutesLine::Other(other) => debug!(line = %other, "Dropping unrecognized routes line"),
        }
    }

    let route_added = !routes.iter().any(|r| r == route_line.trim());
    if route_added {
        routes.push(route_line.trim().to_string());
    }

    let mut lines: Vec<String> = vec![
        "<?php".to_string(),
        String::new(),
        ROUTE_IMPORT.to_string(),
        controller_import.to_string(),
    ];
    lines.extend(imports);
    lines.push(String::new());
    lines.extend(routes);

    let mut content = lines.join("\n");
    content.push('\n');

    RebuiltRoutes {
        content,
        route_added,
    }
}

/// Declares resource routes in the project's routes file
pub struct RouteInjector {
    layout: ProjectLayout,
}

impl RouteInjector {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    fn try_add_route(
        &self,
        path: &Path,
        controller_import: &str,
        route_line: &str,
    ) -> Result<InjectionOutcome, InjectionError> {
        let existing = match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(InjectionError::io(path, e)),
        };

        let rebuilt = rebuild_routes(
            existing.as_deref().unwrap_or_default(),
            controller_import,
            route_line,
        );
        if !rebuilt.route_added {
            info!(route = %route_line, "Route already exists");
        }

        let path_buf = path.to_path_buf();
        match existing {
            Some(content) if content == rebuilt.content => {
                Ok(InjectionOutcome::Unchanged { path: path_buf })
            }
            Some(_) if !rebuilt.route_added => {
                write_file(path, &rebuilt.content)?;
                info!(path = %path.display(), "Normalized routes file");
                Ok(InjectionOutcome::Reformatted { path: path_buf })
            }
            Some(_) => {
                write_file(path, &rebuilt.content)?;
                info!(path = %path.display(), route = %route_line, "Updated routes");
                Ok(InjectionOutcome::Updated { path: path_buf })
            }
            None => {
                write_file(path, &rebuilt.content)?;
                info!(path = %path.display(), route = %route_line, "Created routes file");
                Ok(InjectionOutcome::Created { path: path_buf })
            }
        }
    }
}

impl RouteRegistrar for RouteInjector {
    fn add_route(&self, entity: &EntityName) -> InjectionOutcome {
        let name = entity.pascal();
        let controller_import = format!("use App\\Http\\Controllers\\{name}Controller;");
        let route_line = format!(
            "Route::resource('{}', {name}Controller::class);",
            entity.route_segment()
        );

        let path = self.layout.routes_file();
        self.try_add_route(path, &controller_import, &route_line)
            .unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Route must be added manually");
                manual(
                    path,
                    &e,
                    vec![ROUTE_IMPORT.to_string(), controller_import, route_line],
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PRODUCT_IMPORT: &str = "use App\\Http\\Controllers\\ProductController;";
    const PRODUCT_ROUTE: &str = "Route::resource('products', ProductController::class);";

    #[test]
    fn test_classify() {
        assert_eq!(RoutesLine::classify("   "), None);
        assert_eq!(
            RoutesLine::classify("use Foo\\Bar;"),
            Some(RoutesLine::Import("use Foo\\Bar;".to_string()))
        );
        assert_eq!(
            RoutesLine::classify("  Route::get('/', fn () => 1);"),
            Some(RoutesLine::Route("Route::get('/', fn () => 1);".to_string()))
        );
        assert!(matches!(
            RoutesLine::classify("// comment"),
            Some(RoutesLine::Other(_))
        ));
    }

    #[test]
    fn test_rebuild_empty_file() {
        let rebuilt = rebuild_routes("", PRODUCT_IMPORT, PRODUCT_ROUTE);
        assert!(rebuilt.route_added);
        assert_eq!(
            rebuilt.content,
            "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\nuse App\\Http\\Controllers\\ProductController;\n\nRoute::resource('products', ProductController::class);\n"
        );
    }

    #[test]
    fn test_rebuild_keeps_existing_imports_and_routes() {
        let existing = "<?php\n\nuse Illuminate\\Http\\Request;\nuse Illuminate\\Support\\Facades\\Route;\n\n// health check\nRoute::get('/ping', fn () => 'pong');\n";
        let rebuilt = rebuild_routes(existing, PRODUCT_IMPORT, PRODUCT_ROUTE);
        assert_eq!(
            rebuilt.content,
            "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\nuse App\\Http\\Controllers\\ProductController;\nuse Illuminate\\Http\\Request;\n\nRoute::get('/ping', fn () => 'pong');\nRoute::resource('products', ProductController::class);\n"
        );
    }

    #[test]
    fn test_rebuild_is_a_fixed_point() {
        let once = rebuild_routes("<?php\n", PRODUCT_IMPORT, PRODUCT_ROUTE);
        let twice = rebuild_routes(&once.content, PRODUCT_IMPORT, PRODUCT_ROUTE);
        assert!(!twice.route_added);
        assert_eq!(once.content, twice.content);
        assert_eq!(twice.content.matches(PRODUCT_IMPORT).count(), 1);
    }

    #[test]
    fn test_rebuild_strips_closing_tag_and_duplicate_imports() {
        let existing = "<?php\nuse A\\B;\nuse A\\B;\nRoute::resource('products', ProductController::class);\n?>\n";
        let rebuilt = rebuild_routes(existing, PRODUCT_IMPORT, PRODUCT_ROUTE);
        assert!(!rebuilt.route_added);
        assert!(!rebuilt.content.contains("?>"));
        assert_eq!(rebuilt.content.matches("use A\\B;").count(), 1);
        assert!(rebuilt.content.ends_with(");\n"));
    }

    #[test]
    fn test_rebuild_keeps_imports_with_trailing_comments() {
        let existing = "<?php\n\nuse Illuminate\\Support\\Facades\\Route;\nuse App\\Http\\Controllers\\AuthController; // login\n\nRoute::post('/login', [AuthController::class, 'login']);\n";
        let rebuilt = rebuild_routes(existing, PRODUCT_IMPORT, PRODUCT_ROUTE);
        assert!(rebuilt
            .content
            .contains("use App\\Http\\Controllers\\AuthController; // login\n"));
        assert!(rebuilt
            .content
            .contains("Route::post('/login', [AuthController::class, 'login']);"));
        assert_eq!(rebuilt.content.matches("Facades\\Route;").count(), 1);
    }

    #[test]
    fn test_rebuild_dedups_imports_by_statement() {
        let existing = "<?php\nuse A\\B;\nuse A\\B; // again\nuse App\\Http\\Controllers\\ProductController; // ours\n";
        let rebuilt = rebuild_routes(existing, PRODUCT_IMPORT, PRODUCT_ROUTE);
        assert_eq!(rebuilt.content.matches("use A\\B;").count(), 1);
        assert_eq!(rebuilt.content.matches("ProductController;").count(), 1);
    }

    #[test]
    fn test_existing_route_in_unnormalized_file_is_reformatted() {
        let temp_dir = TempDir::new().unwrap();
        let routes = temp_dir.path().join("routes/api.php");
        fs::create_dir_all(routes.parent().unwrap()).unwrap();
        fs::write(
            &routes,
            "<?php\nuse App\\Http\\Controllers\\ProductController;\nuse Illuminate\\Support\\Facades\\Route;\nRoute::resource('products', ProductController::class);\n",
        )
        .unwrap();
        let injector = RouteInjector::new(ProjectLayout::with_defaults(temp_dir.path()));

        let outcome = injector.add_route(&EntityName::parse("Product").unwrap());

        assert!(matches!(outcome, InjectionOutcome::Reformatted { .. }));
        let content = fs::read_to_string(&routes).unwrap();
        assert_eq!(content.matches(PRODUCT_ROUTE).count(), 1);
    }

    #[test]
    fn test_add_route_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let injector = RouteInjector::new(ProjectLayout::with_defaults(temp_dir.path()));

        let outcome = injector.add_route(&EntityName::parse("Product").unwrap());

        assert!(matches!(outcome, InjectionOutcome::Created { .. }));
        let routes = fs::read_to_string(temp_dir.path().join("routes/api.php")).unwrap();
        assert!(routes.contains(PRODUCT_ROUTE));
    }

    #[test]
    fn test_add_route_twice_is_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let injector = RouteInjector::new(ProjectLayout::with_defaults(temp_dir.path()));
        let entity = EntityName::parse("Product").unwrap();

        injector.add_route(&entity);
        let before = fs::read_to_string(temp_dir.path().join("routes/api.php")).unwrap();
        let outcome = injector.add_route(&entity);
        let after = fs::read_to_string(temp_dir.path().join("routes/api.php")).unwrap();

        assert!(matches!(outcome, InjectionOutcome::Unchanged { .. }));
        assert_eq!(before, after);
    }

    #[test]
    fn test_hr_route_segment() {
        let temp_dir = TempDir::new().unwrap();
        let injector = RouteInjector::new(ProjectLayout::with_defaults(temp_dir.path()));

        injector.add_route(&EntityName::parse("HR").unwrap());

        let routes = fs::read_to_string(temp_dir.path().join("routes/api.php")).unwrap();
        assert!(routes.contains("Route::resource('h_r_s', HRController::class);"));
        assert!(routes.contains("use App\\Http\\Controllers\\HRController;"));
    }

    #[test]
    fn test_unreadable_routes_path_is_manual() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("routes/api.php")).unwrap();
        let injector = RouteInjector::new(ProjectLayout::with_defaults(temp_dir.path()));

        match injector.add_route(&EntityName::parse("Product").unwrap()) {
            InjectionOutcome::Manual { instructions, .. } => {
                assert_eq!(
                    instructions,
                    vec![
                        ROUTE_IMPORT.to_string(),
                        PRODUCT_IMPORT.to_string(),
                        PRODUCT_ROUTE.to_string()
                    ]
                );
            }
            other => panic!("Expected manual outcome, got {other:?}"),
        }
    }
}
