//! Instruction sent to the inference service.

use triage_core::models::CategorySet;

/// Render the classification instruction for one example.
pub fn build_prompt(subject: &str, body: &str, categories: &CategorySet) -> String {
    let category_list = categories
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert email classifier for business communications.\n\
         \n\
         Analyze this email and classify it into ONE of the following categories:\n\
         \n\
         {category_list}\n\
         \n\
         Email Subject: {subject}\n\
         Email Body: {body}\n\
         \n\
         Instructions:\n\
         1. Choose the MOST APPROPRIATE category from the list above\n\
         2. Consider business context, urgency, and potential impact\n\
         3. Look for keywords that indicate complaints, opportunities, legal issues, etc.\n\
         4. Respond with ONLY the category name, exactly as listed above\n\
         \n\
         Category:"
    )
}
