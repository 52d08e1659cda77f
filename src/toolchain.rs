//! MSVC command assembly and invocation.
//!
//! The invocation is built as an ordered token list and only joined into a
//! single line for display; the child process gets the discrete arguments.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

use crate::plan::{BuildPlan, Target};

pub const COMPILER: &str = "cl";

/// Ordered argument list for one cl invocation. Slot order is fixed:
/// flags, sources, /Fe, /Fd, includes, /link, libraries.
pub fn arguments(plan: &BuildPlan) -> Vec<String> {
    let mut args = plan.flags.clone();
    args.extend(plan.sources.iter().cloned());
    args.push(format!("/Fe:{}", plan.output_file()));
    args.push(format!("/Fd:{}", plan.pdb_file()));
    args.extend(plan.includes.iter().cloned());
    args.push("/link".to_string());
    args.extend(plan.libraries.iter().cloned());
    args
}

/// Single-line rendering of the invocation, as printed before execution.
pub fn render(program: &str, args: &[String]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Derive the plan for `target`, run the compiler, and clean up on success.
pub fn run_build(target: Target) -> Result<()> {
    let plan = BuildPlan::derive(target);
    invoke(COMPILER, &plan, Path::new("."))
}

/// Print the command line (or the whole plan as JSON) without executing.
pub fn print_command(target: Target, json: bool) -> Result<()> {
    let plan = BuildPlan::derive(target);
    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", render(COMPILER, &arguments(&plan)));
    }
    Ok(())
}

fn invoke(compiler: &str, plan: &BuildPlan, dir: &Path) -> Result<()> {
    let args = arguments(plan);
    println!("{}", render(compiler, &args));

    let status = Command::new(compiler)
        .args(&args)
        .current_dir(dir)
        .status()
        .with_context(|| {
            format!("Failed to run {compiler} - is the MSVC environment (vcvars64) set up?")
        })?;

    complete(status.success(), dir)
}

/// Branch on the compiler's exit status: clean up intermediates on success,
/// fail without touching the working directory otherwise.
fn complete(success: bool, dir: &Path) -> Result<()> {
    if !success {
        bail!("Problems during compilation");
    }
    crate::clean::clean(dir)?;
    println!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_order() {
        let plan = BuildPlan::derive(Target::Vst3);
        let args = arguments(&plan);

        let fe = args.iter().position(|a| a.starts_with("/Fe:")).unwrap();
        let fd = args.iter().position(|a| a.starts_with("/Fd:")).unwrap();
        let link = args.iter().position(|a| a.as_str() == "/link").unwrap();
        let first_source = args.iter().position(|a| a.as_str() == "main.cpp").unwrap();
        let first_include = args.iter().position(|a| a.as_str() == "/I../../src").unwrap();

        assert!(first_source < fe);
        assert_eq!(fd, fe + 1);
        assert!(fd < first_include);
        assert!(first_include < link);
        // Everything after /link is a library.
        assert!(args[link + 1..].iter().all(|a| a.ends_with(".lib")));
    }

    #[test]
    fn test_vst3_command_line() {
        let plan = BuildPlan::derive(Target::Vst3);
        let line = render(COMPILER, &arguments(&plan));
        assert_eq!(
            line,
            "cl /nologo /MD /utf-8 /Zi /EHsc /MP3 /W3 /LD \
             main.cpp \
             imgui/imgui.cpp \
             imgui/backends/imgui_impl_win32.cpp \
             imgui/backends/imgui_impl_opengl3.cpp \
             imgui/imgui_draw.cpp \
             imgui/imgui_tables.cpp \
             imgui/imgui_widgets.cpp \
             ../../src/cplug_vst3.c \
             /Fe:plugin.vst3 /Fd:plugin.pdb \
             /I../../src /Iimgui /Iimgui/backends /FIconfig.h \
             /link opengl32.lib kernel32.lib user32.lib gdi32.lib"
        );
    }

    #[test]
    fn test_standalone_command_line() {
        let plan = BuildPlan::derive(Target::Standalone);
        let line = render(COMPILER, &arguments(&plan));
        assert!(line.contains("../../src/cplug_standalone_win.c"));
        assert!(line.contains("/Fe:plugin.exe"));
        assert!(line.ends_with("/link opengl32.lib kernel32.lib user32.lib gdi32.lib Ole32.lib"));
        assert!(!line.contains("/LD"));
        assert!(!line.contains("cplug_vst3.c"));
    }

    #[test]
    fn test_render_is_pure_join() {
        let args = vec!["/nologo".to_string(), "a b".to_string()];
        assert_eq!(render("cl", &args), "cl /nologo a b");
        assert_eq!(render("cl", &args), render("cl", &args));
        assert_eq!(render("cl", &[]), "cl");
    }

    #[test]
    fn test_failed_invocation_skips_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("main.obj"), b"o").unwrap();

        let err = complete(false, dir.path()).unwrap_err();
        assert!(err.to_string().contains("compilation"));
        // The intermediate must survive a failed build.
        assert!(dir.path().join("main.obj").exists());
    }

    #[test]
    fn test_successful_invocation_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("main.obj"), b"o").unwrap();
        std::fs::write(dir.path().join("plugin.vst3"), b"bin").unwrap();

        complete(true, dir.path()).unwrap();
        assert!(!dir.path().join("main.obj").exists());
        assert!(dir.path().join("plugin.vst3").exists());
    }
}
