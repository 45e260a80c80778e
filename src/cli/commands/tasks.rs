use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks::TaskRepository;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::colors::{RESET, accent_for_theme};
use crate::utils::table::Table;

const TASK_COL_WIDTH: usize = 60;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tasks { file } = cmd {
        let repo = TaskRepository::new(cfg.tasks_path());
        let mut tasks = repo.list_tasks()?;

        // --file project.md e --file project sono equivalenti
        if let Some(f) = file {
            let stem = f.strip_suffix(".md").unwrap_or(f);
            tasks.retain(|t| t.source == stem);
        }

        if tasks.is_empty() {
            messages::info(format!(
                "No open tasks found in {}",
                cfg.tasks_path().display()
            ));
            return Ok(());
        }

        let accent = accent_for_theme(&cfg.theme);
        println!("{}📋 Open tasks:{}\n", accent, RESET);

        let mut table = Table::new(&["#", "File", "Task"]);

        for (i, task) in tasks.iter().enumerate() {
            let wrapped = textwrap::fill(&task.text, TASK_COL_WIDTH);
            let mut lines = wrapped.lines();

            let first = lines.next().unwrap_or("").to_string();
            table.add_row(vec![(i + 1).to_string(), task.source.clone(), first]);

            // continuation lines keep the number and file columns empty
            for line in lines {
                table.add_row(vec![String::new(), String::new(), line.to_string()]);
            }
        }

        print!("{}", table.render());

        println!(
            "\n{} open task(s). Start one with `rpomodoro start <#>`.",
            tasks.len()
        );
    }

    Ok(())
}
