use crate::readme::model::FileSummary;

/// Asks which of `folders` the request refers to. The trailing `./` nudges
/// the model to answer with a bare relative path.
pub fn find_target_folder_prompt(request: &str, folders: &[String]) -> String {
    format!(
        "The user would like you to create a README file for one of the folders in their project. \
         Which of the following folders in the project is the user most likely referring to?\n\n\
         {folders}\n\n\
         User prompt:\n\
         {request}\n\n\
         The user is referring to the folder: ./",
        folders = folders.join("\n"),
        request = request.trim(),
    )
}

pub fn summarize_file_prompt(filename: &str, content: &str) -> String {
    format!(
        "Provide a summary of no more than 2 sentences of the following code file:\n\n\
         Filename: {filename}\n\
         File contents:\n\
         {content}"
    )
    .trim()
    .to_string()
}

pub fn readme_prompt(folder_name: &str, summaries: &[FileSummary]) -> String {
    let files = summaries
        .iter()
        .map(|s| format!("File {}: {}", s.filename, s.summary).trim().to_string())
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "Generate a README.md markdown file that summarizes the following folder containing code:\n\n\
         Folder name: {folder_name}\n\n\
         {files}\n\n\
         Contents of README.md:"
    )
}
