use std::{
    env,
    io::{self, BufRead, Write},
};

use anyhow::{anyhow, Context};
use studyquiz::{
    api::ApiClient,
    config::Config,
    quiz::{generate_quiz, Interaction, NextAction, QuizCustomization, QuizRepository, QuizRun},
    storage::{load_summary, FileStorage},
};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const USAGE: &str = "Usage: studyquiz <generate [options.yaml] | take [options.yaml] | ask <query> | notes>";

enum Command {
    Generate(Option<String>),
    Take(Option<String>),
    Ask(String),
    Notes,
}

fn parse_command(mut args: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    let command = args.next().context("a command is required")?;
    match command.as_str() {
        "generate" => Ok(Command::Generate(args.next())),
        "take" => Ok(Command::Take(args.next())),
        "ask" => {
            let query = args.collect::<Vec<_>>().join(" ");
            if query.trim().is_empty() {
                return Err(anyhow!("ask needs a query"));
            }
            Ok(Command::Ask(query))
        }
        "notes" => Ok(Command::Notes),
        other => Err(anyhow!("unknown command '{}'", other)),
    }
}

fn load_customization(path: Option<&str>) -> anyhow::Result<QuizCustomization> {
    match path {
        Some(path) => QuizCustomization::from_file(path)
            .with_context(|| format!("failed to load quiz options from {}", path)),
        None => Ok(QuizCustomization::default()),
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let command = match parse_command(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", USAGE);
            return Err(e);
        }
    };

    let config = Config::from_env();
    let client = ApiClient::from_config(&config);
    let mut repository = QuizRepository::new(FileStorage::new(&config.store_dir));

    match command {
        Command::Generate(path) => {
            let customization = load_customization(path.as_deref())?;
            let payload = generate_quiz(&client, &mut repository, &customization)
                .map_err(|e| anyhow!(e.message()))
                .context("quiz generation failed")?;
            println!(
                "generated {BOLD}{}{RESET} questions, run `studyquiz take` to start",
                payload.questions_and_answers.len()
            );
        }
        Command::Take(path) => {
            let customization = load_customization(path.as_deref())?;
            let run = QuizRun::start(client, repository, customization)
                .context("could not start the quiz, generate one first")?;
            take(run)?;
        }
        Command::Ask(query) => {
            let answer = client.query_bot(&query).map_err(|e| anyhow!(e.message()))?;
            println!("{}", answer);
        }
        Command::Notes => match load_summary(repository.storage())? {
            Some(notes) => println!("{}", notes),
            None => println!("No generated notes found."),
        },
    }

    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> anyhow::Result<String> {
    print!("{}> ", text);
    io::stdout().flush()?;
    let line = lines.next().context("input closed")??;
    Ok(line.trim().to_string())
}

fn parse_indices(input: &str) -> Vec<usize> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|s| s.parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .map(|n| n - 1)
        .collect()
}

fn take(mut run: QuizRun) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if run.controller().is_completed() {
            if !completion_screen(&mut run, &mut lines)? {
                return Ok(());
            }
            continue;
        }

        let progress = run.controller().progress();
        println!(
            "\n{BOLD}Question {} of {}{RESET} ({:.0}%)\n{}",
            progress.current,
            progress.total,
            progress.percent,
            run.controller().current_question().question
        );

        if run.interaction().is_none() {
            println!("(this question cannot be displayed)");
        }

        while run.next_action().is_none() {
            answer_once(&mut run, &mut lines)?;
        }

        if let Some(feedback) = run.interaction().and_then(|i| i.feedback()) {
            println!("{BOLD}{}{RESET}", feedback.verdict);
            println!("Answer: {}", feedback.answer);
            if let Some(explanation) = feedback.explanation {
                println!("Explanation: {}", explanation);
            }
        }

        match run.next_action() {
            Some(NextAction::Next) => {
                prompt(&mut lines, "enter for next question")?;
                run.next().map_err(|e| anyhow!(e.message()))?;
            }
            Some(NextAction::Finish) => {
                prompt(&mut lines, "enter to finish")?;
                if let Err(e) = run.finish() {
                    println!("{}", e.message());
                }
            }
            None => {}
        }
    }
}

fn answer_once(
    run: &mut QuizRun,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    let edited = match run.interaction_mut() {
        Some(Interaction::Text(q)) => {
            let entry = prompt(lines, "answer")?;
            q.enter(entry)
        }
        Some(Interaction::Choice(q)) => {
            for (idx, option) in q.options().iter().enumerate() {
                println!("  {}. {}", idx + 1, option);
            }
            let input = prompt(lines, "pick one")?;
            match parse_indices(&input).first() {
                Some(idx) => q.select(*idx),
                None => Ok(()),
            }
        }
        Some(Interaction::MultiSelect(q)) => {
            for (idx, option) in q.options().iter().enumerate() {
                let mark = if q.selected().contains(&idx) { "x" } else { " " };
                println!("  [{}] {}. {}", mark, idx + 1, option);
            }
            let input = prompt(lines, "toggle (e.g. 1,3), empty to submit")?;
            let picks = parse_indices(&input);
            if !picks.is_empty() {
                for idx in picks {
                    if let Err(e) = q.toggle(idx) {
                        println!("{}", e.message());
                    }
                }
                return Ok(());
            }
            // empty input submits the current selection
            Ok(())
        }
        None => return Ok(()),
    };

    if let Err(e) = edited {
        println!("{}", e.message());
        return Ok(());
    }
    if let Err(e) = run.submit() {
        println!("{}", e.message());
    }
    Ok(())
}

/// Returns `false` once the student wants to stop.
fn completion_screen(
    run: &mut QuizRun,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<bool> {
    match run.evaluation().report() {
        Some(report) => {
            println!("\n{BOLD}Score: {}%{RESET}", report.score);
            println!("Strength: {}", report.strength);
            println!("Weakness: {}", report.weakness);
            let choice = prompt(lines, "[r]egenerate or [q]uit")?;
            if choice != "r" {
                return Ok(false);
            }
            if let Err(e) = run.regenerate() {
                println!("{}", e.message());
            }
        }
        None => {
            if let Some(error) = run.evaluation().error() {
                println!("{}", error);
            }
            let choice = prompt(lines, "[t]ry again or [q]uit")?;
            if choice != "t" {
                return Ok(false);
            }
            if let Err(e) = run.retry_evaluation() {
                println!("{}", e.message());
            }
        }
    }
    Ok(true)
}
