use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::TaskfoldersError;
use crate::models::{InteractionTarget, TaskRef, STATUSES};
use crate::store::{FolderAdded, PersistenceAdapter, PromptConfirm, TaskStore};

const HELP: &str = "\
commands:
  ls                 show folders; the open folder shows its tasks
  open <folder>      expand/collapse a folder
  mkdir [name]       new folder (numbered if no name)
  rmdir <folder>     delete a folder (asks first)
  add <task>         add a task to the open folder
  rm <task>          delete a task from the open folder
  pick <task>        open/close the status picker of a task
  set <status>       set the status of the picked task
  click [task]       click inside a task's picker, or elsewhere
  help               this text
  quit               leave";

pub fn run(db: Option<&Path>) -> i32 {
    let result = super::open_store(db).and_then(|store| {
        let stdin = io::stdin();
        let mut session = Session::new(store, stdin.lock(), io::stdout());
        session.run().map_err(TaskfoldersError::from)
    });
    super::finish(result.map(|_| 0), false)
}

/// Line-oriented session over one store; the selection lives as long as it does.
pub struct Session<A: PersistenceAdapter, R, W> {
    store: TaskStore<A>,
    input: R,
    output: W,
}

impl<A: PersistenceAdapter, R: BufRead, W: Write> Session<A, R, W> {
    pub fn new(store: TaskStore<A>, input: R, output: W) -> Self {
        Self { store, input, output }
    }

    pub fn into_store(self) -> TaskStore<A> {
        self.store
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }
            let line = line.trim();
            let (cmd, arg) = match line.split_once(char::is_whitespace) {
                Some((cmd, arg)) => (cmd, arg.trim()),
                None => (line, ""),
            };

            match cmd {
                "" => {}
                "quit" | "exit" => return Ok(()),
                _ => {
                    if let Err(e) = self.dispatch(cmd, arg) {
                        writeln!(self.output, "error: {}", e.message)?;
                    }
                }
            }
        }
    }

    fn dispatch(&mut self, cmd: &str, arg: &str) -> Result<(), TaskfoldersError> {
        match cmd {
            "help" => self.say(HELP),
            "ls" => self.list(),
            "open" => {
                self.need_arg(arg, "open <folder>")?;
                self.store.toggle_folder(arg);
                self.list()
            }
            "mkdir" => match self.store.add_folder(Some(arg))? {
                FolderAdded::Created(name) => self.say(&format!("created folder {name}")),
                FolderAdded::AlreadyExists(name) => Err(TaskfoldersError::folder_exists(&name)),
            },
            "rmdir" => {
                self.need_arg(arg, "rmdir <folder>")?;
                if !self.store.collection().contains_folder(arg) {
                    return Err(TaskfoldersError::folder_not_found(arg));
                }
                let mut confirm = PromptConfirm::new(&mut self.input, &mut self.output);
                if self.store.delete_folder(arg, &mut confirm)? {
                    self.say(&format!("deleted folder {arg}"))
                } else {
                    self.say("kept")
                }
            }
            "add" => {
                let folder = self.open_folder()?;
                match self.store.add_task(&folder, arg)? {
                    Some(name) => self.say(&format!("added {name}")),
                    None => Err(TaskfoldersError::validation("usage: add <task>")),
                }
            }
            "rm" => {
                let folder = self.open_folder()?;
                if self.store.delete_task(&folder, arg)? {
                    self.say(&format!("deleted {arg}"))
                } else {
                    Err(TaskfoldersError::task_not_found(&folder, arg))
                }
            }
            "pick" => {
                let folder = self.open_folder()?;
                if self.store.collection().task(&folder, arg).is_none() {
                    return Err(TaskfoldersError::task_not_found(&folder, arg));
                }
                self.store.toggle_dropdown(&folder, arg);
                self.list()
            }
            "set" => {
                self.need_arg(arg, "set <status>")?;
                let Some(picked) = self.store.selection().open_dropdown.clone() else {
                    return Err(TaskfoldersError::validation("pick a task first"));
                };
                self.store.on_status_change(&picked.folder, &picked.task, arg)?;
                self.list()
            }
            "click" => {
                let target = if arg.is_empty() {
                    InteractionTarget::Elsewhere
                } else {
                    InteractionTarget::StatusDropdown(TaskRef::new(self.open_folder()?, arg))
                };
                self.store.on_outside_interaction(&target);
                self.list()
            }
            other => Err(TaskfoldersError::validation(format!(
                "unknown command '{other}' (try `help`)"
            ))),
        }
    }

    fn need_arg(&self, arg: &str, usage: &str) -> Result<(), TaskfoldersError> {
        if arg.is_empty() {
            return Err(TaskfoldersError::validation(format!("usage: {usage}")));
        }
        Ok(())
    }

    fn open_folder(&self) -> Result<String, TaskfoldersError> {
        self.store
            .selection()
            .open_folder
            .clone()
            .ok_or_else(|| TaskfoldersError::validation("open a folder first"))
    }

    fn say(&mut self, text: &str) -> Result<(), TaskfoldersError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn list(&mut self) -> Result<(), TaskfoldersError> {
        let rendered = self.render();
        self.say(&rendered)
    }

    fn render(&self) -> String {
        let tasks = self.store.collection();
        let selection = self.store.selection();
        if tasks.is_empty() {
            return "(no folders)".to_string();
        }

        let mut out = Vec::new();
        for (name, folder) in tasks.iter() {
            let open = selection.open_folder.as_deref() == Some(name.as_str());
            out.push(format!("{} {} ({})", if open { "▾" } else { "▸" }, name, folder.len()));
            if !open {
                continue;
            }
            for (task, record) in folder.iter() {
                out.push(format!("    {} {}", record.status.icon(), task));
                let picked = selection
                    .open_dropdown
                    .as_ref()
                    .is_some_and(|d| d.is(name, task));
                if picked {
                    for s in STATUSES.iter() {
                        let mark = if s.code == record.status.as_str() { "*" } else { " " };
                        out.push(format!("      {mark} {} {}", s.icon, s.code));
                    }
                }
            }
        }
        out.join("\n")
    }
}
