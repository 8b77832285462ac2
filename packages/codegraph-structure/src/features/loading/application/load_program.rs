//! Load program use case
//!
//! Files are read and parsed in list order (or parsed on the rayon pool when
//! `parallel_parse` is set) and the model is always built sequentially in
//! list order, so the result does not depend on scheduling. Within a file,
//! classes and interfaces come first in pre-order, then enums; each type is
//! followed by its fields, constructors and methods in source order.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::LoaderConfig;
use crate::features::loading::domain::PackageIndex;
use crate::features::parsing::domain::{
    classes_then_enums, CompilationUnit, MemberDeclaration, Parameter, TypeDeclaration,
};
use crate::features::parsing::infrastructure::JavaSourceParser;
use crate::features::parsing::ports::SourceParser;
use crate::features::program_points::{ProgramPointKind, VariableInfo};
use crate::features::structure::{ElementDescriptor, ElementId, Program};
use crate::shared::constants::RETURN_VARIABLE;
use crate::shared::models::Result;

/// Builds a [`Program`] from source files
pub struct ProgramLoader<P: SourceParser> {
    parser: P,
    config: LoaderConfig,
}

impl ProgramLoader<JavaSourceParser> {
    /// Loader backed by the tree-sitter Java parser
    pub fn java(config: LoaderConfig) -> Self {
        ProgramLoader::new(JavaSourceParser::new()).with_config(config)
    }
}

impl<P: SourceParser> ProgramLoader<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            config: LoaderConfig::default(),
        }
    }

    /// Replace the loader options and hand them to the parser
    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.parser.configure(&config);
        self.config = config;
        self
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Load `paths` into a new program named `program_name`.
    ///
    /// Paths that are not readable regular files are skipped. The first file
    /// that fails to parse aborts the load and no program is returned.
    pub fn load<S: AsRef<Path>>(&self, program_name: &str, paths: &[S]) -> Result<Program> {
        self.config.validate()?;

        info!(
            "Loading program '{}' from {} path(s) with {} parser",
            program_name,
            paths.len(),
            self.parser.language_name()
        );

        let sources: Vec<(String, String)> = paths
            .iter()
            .filter_map(|p| read_source(p.as_ref()))
            .collect();

        let mut program = Program::new(program_name);
        let mut packages = PackageIndex::new();

        if self.config.parallel_parse {
            let parsed: Vec<Result<CompilationUnit>> = sources
                .par_iter()
                .map(|(path, source)| self.parser.parse(source, path))
                .collect();

            for ((path, _), unit) in sources.iter().zip(parsed) {
                let unit = unit?;
                self.build_unit(&mut program, &mut packages, path, &unit)?;
            }
        } else {
            for (path, source) in &sources {
                let unit = self.parser.parse(source, path)?;
                self.build_unit(&mut program, &mut packages, path, &unit)?;
            }
        }

        info!(
            "Loaded program '{}': {} file(s), {} package(s), {} element(s)",
            program_name,
            sources.len(),
            packages.len(),
            program.len()
        );

        Ok(program)
    }

    fn build_unit(
        &self,
        program: &mut Program,
        packages: &mut PackageIndex,
        file_path: &str,
        unit: &CompilationUnit,
    ) -> Result<()> {
        let package = packages.get_or_create(program, unit.package_name())?;
        let flat = unit.flatten_types();

        // Nesting needs each enclosing type created first, so it keeps plain pre-order
        let order: Vec<usize> = if self.config.nest_member_types {
            (0..flat.len()).collect()
        } else {
            classes_then_enums(&flat)
        };

        let mut type_ids: Vec<Option<ElementId>> = vec![None; flat.len()];
        for index in order {
            let entry = &flat[index];
            let parent = match entry.enclosing.and_then(|i| type_ids[i]) {
                Some(enclosing) if self.config.nest_member_types => enclosing,
                _ => package,
            };
            let decl = entry.decl;
            let id = program.create_child(
                parent,
                ElementDescriptor::type_decl(decl.kind.element_kind(), &decl.name, file_path, decl.span),
            )?;
            type_ids[index] = Some(id);
            self.build_members(program, id, file_path, decl)?;
        }

        debug!(
            "Built {} type(s) from {} (package '{}')",
            flat.len(),
            file_path,
            unit.package_name()
        );
        Ok(())
    }

    fn build_members(
        &self,
        program: &mut Program,
        owner: ElementId,
        file_path: &str,
        decl: &TypeDeclaration,
    ) -> Result<()> {
        for member in &decl.members {
            match member {
                MemberDeclaration::Field {
                    type_name,
                    names,
                    span,
                } => {
                    for name in names {
                        program.create_child(
                            owner,
                            ElementDescriptor::field(name, type_name, file_path, *span),
                        )?;
                    }
                }
                MemberDeclaration::Constructor { name, params, span } => {
                    let id = program.create_child(
                        owner,
                        ElementDescriptor::constructor(name, param_types(params), file_path, *span),
                    )?;
                    let visible = param_variables(params);
                    program.add_program_point(
                        id,
                        ProgramPointKind::ConstructorEntry,
                        span.start_line,
                        visible.clone(),
                    )?;
                    program.add_program_point(id, ProgramPointKind::MethodExit, span.end_line, visible)?;
                }
                MemberDeclaration::Method {
                    name,
                    return_type,
                    params,
                    span,
                } => {
                    let id = program.create_child(
                        owner,
                        ElementDescriptor::method(
                            name,
                            return_type,
                            param_types(params),
                            file_path,
                            *span,
                        ),
                    )?;
                    let entry_vars = param_variables(params);
                    let mut exit_vars = entry_vars.clone();
                    if *return_type != self.config.void_marker {
                        exit_vars.push(VariableInfo::new(RETURN_VARIABLE, return_type));
                    }
                    program.add_program_point(
                        id,
                        ProgramPointKind::MethodEntry,
                        span.start_line,
                        entry_vars,
                    )?;
                    program.add_program_point(id, ProgramPointKind::MethodExit, span.end_line, exit_vars)?;
                }
            }
        }
        Ok(())
    }
}

/// Source text of a readable regular file, keyed by its display path.
/// Bytes that are not valid UTF-8 are replaced, not rejected.
fn read_source(path: &Path) -> Option<(String, String)> {
    let path_str = path.to_string_lossy().into_owned();

    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            debug!("Skipping {}: not a regular file", path_str);
            return None;
        }
        Err(e) => {
            debug!("Skipping {}: {}", path_str, e);
            return None;
        }
    }

    match fs::read(path) {
        Ok(bytes) => {
            let source = match String::from_utf8(bytes) {
                Ok(source) => source,
                Err(e) => {
                    debug!("{} is not valid UTF-8, decoding lossily", path_str);
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            };
            Some((path_str, source))
        }
        Err(e) => {
            debug!("Skipping {}: {}", path_str, e);
            None
        }
    }
}

fn param_types(params: &[Parameter]) -> Vec<String> {
    params.iter().map(|p| p.type_name.clone()).collect()
}

fn param_variables(params: &[Parameter]) -> Vec<VariableInfo> {
    params
        .iter()
        .map(|p| VariableInfo::new(&p.name, &p.type_name))
        .collect()
}
