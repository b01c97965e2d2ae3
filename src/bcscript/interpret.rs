use colored::Colorize;
use tabled::{Alignment, MaxWidth, MinWidth, Modify, Style};
use tabled::builder::Builder;
use tabled::object::Rows;

use super::registry::Registry;
use super::script::{Element, Script, ScriptError};
use super::stack::Stack;

/// Everything an operation may touch during one validation run.
///
/// Passed explicitly to each operation; nothing lives in global state, so independent
/// runs never see each other.
pub struct Context<'a> {
    pub stack: Stack,
    pub registry: &'a Registry,
    pub trace: bool,
}

impl<'a> Context<'a> {
    pub fn new(stack: Stack, registry: &'a Registry, trace: bool) -> Context<'a> {
        Context { stack, registry, trace }
    }
}

/// Runs every element of `script` in order against `ctx`.
///
/// Stops at the first failing element and returns its error. Elements already executed
/// are not rolled back.
pub fn execute(script: &Script, ctx: &mut Context<'_>) -> Result<(), ScriptError> {
    for element in script {
        match element {
            Element::DataPush(value) => ctx.stack.push(value.clone()),
            Element::OpCode(name) => {
                let registry = ctx.registry;
                let operation = registry.get(name)?;
                operation.apply(ctx)?;
            }
        }

        if ctx.trace {
            print_trace(element, &ctx.stack);
        }
    }
    Ok(())
}

/// One trace record: the element's token and the stack, bottom-first.
pub fn trace_line(token: &str, stack: &[String]) -> String {
    format!("[TRACE] token={}  stack=[{}]", token, stack.join(", "))
}

fn print_trace(element: &Element, stack: &Stack) {
    let line = trace_line(element.token(), &stack.snapshot());
    let styled = match element {
        Element::OpCode(_) => line.bold(),
        Element::DataPush(_) => line.bright_blue(),
    };
    eprintln!("{}", styled);
}

// Constants to configure the final stack display
const MAX_STACK_DISPLAY_WIDTH: usize = 80;
const MIN_STACK_DISPLAY_WIDTH: usize = 30;

/// Renders `stack` as a one-column table, top of the stack first.
pub fn render_stack(stack: &[String], title: &str, min_width: usize, max_width: usize) -> String {
    let mut rows: Vec<String> = stack.iter().rev().cloned().collect();
    if rows.is_empty() {
        rows.push(String::from(""));
    }

    let mut table_builder = Builder::default().set_columns([title]);
    for item in &rows {
        table_builder = table_builder.add_record([item]);
    }

    table_builder.build().with(Style::modern())
        .with(MaxWidth::wrapping(max_width))
        .with(MinWidth::new(min_width))
        .with(Modify::new(Rows::new(1..))
            .with(Alignment::left()))
        .to_string()
}

pub fn print_final_state(stack: &[String]) {
    let mut display_max_width = MAX_STACK_DISPLAY_WIDTH;

    if let Some((w, _)) = term_size::dimensions() {
        if w > MIN_STACK_DISPLAY_WIDTH && w < MAX_STACK_DISPLAY_WIDTH {
            display_max_width = w;
        }
    }

    eprintln!("{}", "Final state".bold());
    eprint!("{}", render_stack(stack, "Main Stack", MIN_STACK_DISPLAY_WIDTH, display_max_width));
}
