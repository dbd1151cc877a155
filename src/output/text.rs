use crate::models::{Folder, StatusInfo, TaskCollection, UNKNOWN_ICON};

pub fn print_task_list(folder: &Folder) {
    if folder.is_empty() {
        println!("  (no tasks)");
        return;
    }
    for (name, record) in folder.iter() {
        println!("  {} {} [{}]", record.status.icon(), name, record.status.label());
    }
}

pub fn print_folder(name: &str, folder: &Folder) {
    println!("{} ({})", name, folder.len());
    print_task_list(folder);
}

pub fn print_collection(c: &TaskCollection) {
    if c.is_empty() {
        println!("No folders found.");
        return;
    }
    for (name, folder) in c.iter() {
        print_folder(name, folder);
    }
}

pub fn print_folder_list(c: &TaskCollection) {
    if c.is_empty() {
        println!("No folders found.");
        return;
    }
    for (name, folder) in c.iter() {
        println!("  {} ({} tasks)", name, folder.len());
    }
}

pub fn print_statuses(statuses: &[StatusInfo]) {
    for s in statuses {
        println!("  {} {:<12} {}", s.icon, s.code, s.label);
    }
    println!("  {} {:<12} {}", UNKNOWN_ICON, "(other)", "Unknown status");
}
