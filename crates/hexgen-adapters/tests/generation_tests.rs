//! End-to-end generation tests wiring real adapters into the core services.

use std::path::{Path, PathBuf};

use hexgen_adapters::{MemoryFileHandler, TeraRenderer, layout::crud_layout};
use hexgen_core::prelude::*;

fn generator(fs: &MemoryFileHandler) -> ModuleGenerator {
    ModuleGenerator::new(
        Box::new(TeraRenderer::new()),
        Box::new(fs.clone()),
        crud_layout(),
    )
}

fn seed_builtin_root(fs: &MemoryFileHandler) -> PathBuf {
    let root = PathBuf::from("/assets/builtin_apps");
    for app in ["user", "role", "auth", "smtp"] {
        fs.seed_file(root.join(format!("src/{app}/__init__.py")), "");
        fs.seed_file(
            root.join(format!("src/{app}/infrastructure/web.py")),
            format!("# {app} routes\n"),
        );
    }
    root
}

#[test]
fn order_with_create_and_list_produces_exact_file_set() {
    let fs = MemoryFileHandler::new();
    let name = ModuleName::parse("Order").unwrap();
    let actions = ActionSet::new(["create", "list"]).unwrap();

    let report = generator(&fs)
        .run(Path::new("/project"), &name, &actions)
        .unwrap();

    let mut files = fs.list_files();
    files.sort();

    // 4 markers + 13 layer files + use case index + 2 action files.
    assert_eq!(files.len(), 20, "unexpected file set: {files:#?}");
    assert_eq!(report.files_written, 20);
    assert_eq!(report.directories_created, 5);

    let expect = |rel: &str| {
        let path = PathBuf::from("/project/src/order").join(rel);
        assert!(files.contains(&path), "missing {rel}");
    };
    expect("__init__.py");
    expect("domain/models.py");
    expect("domain/repository.py");
    expect("application/service.py");
    expect("application/use_cases/__init__.py");
    expect("application/use_cases/create.py");
    expect("application/use_cases/list.py");
    expect("infrastructure/web.py");

    let absent = PathBuf::from("/project/src/order/application/use_cases/delete.py");
    assert!(!files.contains(&absent), "delete.py generated for unselected action");
}

#[test]
fn rendered_files_substitute_both_name_forms() {
    let fs = MemoryFileHandler::new();
    let name = ModuleName::parse("OrderLine").unwrap();

    generator(&fs)
        .run(Path::new("/project"), &name, &ActionSet::all())
        .unwrap();

    let models = fs
        .read_file(Path::new("/project/src/order_line/domain/models.py"))
        .unwrap();
    assert!(models.contains("class OrderLine(Base):"));
    assert!(models.contains("__tablename__ = \"order_line\""));

    let create = fs
        .read_file(Path::new(
            "/project/src/order_line/application/use_cases/create.py",
        ))
        .unwrap();
    assert!(create.contains("class CreateUseCase:"));
    assert!(create.contains("order_line_repository"));
}

#[test]
fn rerun_preserves_hand_edits_without_error() {
    let fs = MemoryFileHandler::new();
    let name = ModuleName::parse("Order").unwrap();
    let actions = ActionSet::all();
    let generator = generator(&fs);

    generator.run(Path::new("/project"), &name, &actions).unwrap();

    let edited = Path::new("/project/src/order/domain/models.py");
    fs.write_file(edited, "# my custom model\n", true).unwrap();
    let snapshot = fs.list_files();

    let report = generator.run(Path::new("/project"), &name, &actions).unwrap();

    assert!(report.is_noop());
    assert_eq!(report.files_skipped, snapshot.len());
    assert_eq!(
        fs.read_file(edited).as_deref(),
        Some("# my custom model\n"),
        "hand edit was clobbered"
    );
    assert_eq!(fs.list_files(), snapshot);
}

#[test]
fn plan_is_pure_and_leaves_filesystem_untouched() {
    let fs = MemoryFileHandler::new();
    let name = ModuleName::parse("Order").unwrap();

    let plan = generator(&fs)
        .plan(Path::new("/project"), &name, &ActionSet::all())
        .unwrap();

    assert_eq!(plan.directories.len(), 5);
    assert_eq!(plan.files.len(), 23);
    assert_eq!(fs.mutation_count(), 0);
    assert!(fs.list_files().is_empty());
}

#[test]
fn unknown_builtin_app_fails_before_any_write() {
    let fs = MemoryFileHandler::new();
    let root = seed_builtin_root(&fs);
    let before = fs.mutation_count();

    let installer = BuiltinGenerator::new(Box::new(fs.clone()), &root);
    let err = installer
        .copy_app(Path::new("/project"), "blog", false)
        .unwrap_err();

    assert!(matches!(
        err,
        HexgenError::Domain(hexgen_core::domain::DomainError::UnknownApp { .. })
    ));
    assert_eq!(fs.mutation_count(), before, "filesystem was touched");
}

#[test]
fn builtin_app_copies_verbatim_and_skips_on_rerun() {
    let fs = MemoryFileHandler::new();
    let root = seed_builtin_root(&fs);
    let installer = BuiltinGenerator::new(Box::new(fs.clone()), &root);

    let report = installer.copy_app(Path::new("/project"), "user", false).unwrap();
    assert!(!report.is_noop());
    assert_eq!(
        fs.read_file(Path::new("/project/src/user/infrastructure/web.py"))
            .as_deref(),
        Some("# user routes\n")
    );

    let rerun = installer.copy_app(Path::new("/project"), "user", false).unwrap();
    assert!(rerun.is_noop());
}

#[test]
fn base_skeleton_materializes_once() {
    let fs = MemoryFileHandler::new();
    let root = seed_builtin_root(&fs);
    for dir in ["env_vars", "src/alembic", "src/common"] {
        fs.seed_directory(root.join(dir));
        fs.seed_file(root.join(dir).join(".keep"), "");
    }
    for file in [
        "src/__init__.py",
        "src/main.py",
        "src/config.py",
        ".env",
        ".gitignore",
        "alembic.ini",
        "docker-compose.yml",
        "dockerfile",
        "init.sh",
        "requirements.txt",
        "readme.md",
    ] {
        fs.seed_file(root.join(file), format!("# {file}\n"));
    }

    let base = BaseProjectGenerator::new(BuiltinGenerator::new(Box::new(fs.clone()), &root));

    let first = base.run(Path::new("/project")).unwrap();
    assert_eq!(first.directories_created, 3);
    assert_eq!(first.files_written, 11);
    assert!(fs.file_exists(Path::new("/project/src/main.py")));

    let second = base.run(Path::new("/project")).unwrap();
    assert!(second.is_noop());
    assert_eq!(second.files_skipped, 11);
}
