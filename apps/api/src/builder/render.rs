//! Markdown rendering of a stored resume, for preview and download.

use crate::builder::models::ResumeRecord;

pub fn render_markdown(resume: &ResumeRecord) -> String {
    let info = &resume.personal_info;
    let mut out = format!("# {}\n\n", info.full_name.trim());

    let contact: Vec<&str> = [info.email.as_str(), info.phone.as_str()]
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if !contact.is_empty() {
        out.push_str(&format!("{}  \n", contact.join(" | ")));
    }
    for (label, value) in [
        ("", &info.location),
        ("LinkedIn: ", &info.linkedin),
        ("Portfolio: ", &info.portfolio),
    ] {
        if !value.trim().is_empty() {
            out.push_str(&format!("{label}{}  \n", value.trim()));
        }
    }

    out.push_str(&format!(
        "\n## Professional Summary\n\n{}\n",
        resume.professional_summary.trim()
    ));

    if !resume.work_experience.is_empty() {
        out.push_str("\n## Work Experience\n");
        for exp in &resume.work_experience {
            out.push_str(&format!("\n**{} at {}**  \n", exp.position, exp.company));
            out.push_str(&format!("{} - {}\n\n", exp.start_date, exp.end_date));
            out.push_str(&format!("{}\n", exp.responsibilities.trim()));
        }
    }

    if !resume.education.is_empty() {
        out.push_str("\n## Education\n");
        for edu in &resume.education {
            out.push_str(&format!("\n**{} - {}**  \n", edu.degree, edu.institution));
            out.push_str(&format!("Graduated: {}", edu.graduation_year));
            if !edu.gpa.trim().is_empty() {
                out.push_str(&format!(" | GPA: {}", edu.gpa.trim()));
            }
            out.push('\n');
        }
    }

    if !resume.skills.is_empty() {
        out.push_str(&format!("\n## Skills\n\n{}\n", resume.skills.join(" • ")));
    }

    out
}
