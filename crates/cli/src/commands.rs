//! Demonstration routines, one per subcommand.
//!
//! Each routine writes to the given writer so tests can capture output.

use std::io::Write;

use anyhow::Context;
use staffroom_domain::{
    create_employee, execute_work, is_director, is_valid_subject, parse_document,
    teach_class_str, validate_teacher, FieldMap, FieldValue, Salary, StaffDuties, TeacherRecord,
};

use crate::config::OutputFormat;

fn write_record(
    out: &mut impl Write,
    label: &str,
    record: &TeacherRecord,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}:", label)?;
            for line in record.to_string().lines() {
                writeln!(out, "  {}", line)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(record).context("serializing teacher record")?;
            writeln!(out, "{}: {}", label, json)?;
        }
    }
    Ok(())
}

fn fields(pairs: Vec<(&str, FieldValue)>) -> FieldMap {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Sample records, read-only identity fields, and mutation of the rest.
pub fn teachers(out: &mut impl Write, format: OutputFormat) -> anyhow::Result<()> {
    let mut teacher1 = TeacherRecord::new("John", "Smith", true, "New York")
        .with_years_of_experience(5.0)
        .with_extra("contract", true);

    let teacher2 = TeacherRecord::new("Jane", "Doe", false, "California")
        .with_extra("contract", false)
        .with_extra("department", "Mathematics")
        .with_extra("salary", 50000);

    let teacher3 = TeacherRecord::new("Robert", "Johnson", true, "Texas")
        .with_years_of_experience(10.0)
        .with_extra("contract", true)
        .with_extra("department", "Science")
        .with_extra("hasPhD", true)
        .with_extra("courses", vec!["Biology", "Chemistry"])
        .with_extra("officeNumber", "204B");

    write_record(out, "Teacher 1", &teacher1, format)?;
    write_record(out, "Teacher 2", &teacher2, format)?;
    write_record(out, "Teacher 3", &teacher3, format)?;

    writeln!(out, "\n--- Read-only identity fields ---")?;
    writeln!(out, "Teacher1 firstName: {}", teacher1.first_name())?;
    writeln!(out, "Teacher1 lastName: {}", teacher1.last_name())?;

    teacher1.set_full_time_employee(false);
    teacher1.set_location("Boston");
    teacher1.set_years_of_experience(Some(7.0));
    teacher1.insert_extra("contract", false)?;
    teacher1.insert_extra("newAttribute", "This is dynamically added")?;
    write_record(out, "Modified Teacher 1", &teacher1, format)?;

    if let Err(err) = teacher1.insert_extra("firstName", "NewName") {
        writeln!(out, "Renaming Teacher 1 rejected: {}", err)?;
    }

    writeln!(out, "\n--- Accessing additional attributes ---")?;
    let show = |value: Option<&FieldValue>| value.map_or("undefined".to_string(), |v| v.to_string());
    writeln!(out, "Teacher2 contract: {}", show(teacher2.extra("contract")))?;
    writeln!(out, "Teacher2 department: {}", show(teacher2.extra("department")))?;
    writeln!(out, "Teacher3 hasPhD: {}", show(teacher3.extra("hasPhD")))?;
    writeln!(out, "Teacher3 courses: {}", show(teacher3.extra("courses")))?;
    Ok(())
}

/// Records built through the factory, then the information block.
pub fn factory(out: &mut impl Write, format: OutputFormat) -> anyhow::Result<()> {
    let new_teacher1 = TeacherRecord::create(
        "Alice",
        "Brown",
        true,
        "Florida",
        Some(8.0),
        Some(fields(vec![
            ("contract", true.into()),
            ("department", "English".into()),
            ("hasPhD", true.into()),
            ("specialization", "Literature".into()),
        ])),
    );

    let new_teacher2 = TeacherRecord::create(
        "Bob",
        "Wilson",
        false,
        "Oregon",
        None,
        Some(fields(vec![
            ("contract", false.into()),
            ("isSubstitute", true.into()),
            ("availableDays", vec!["Monday", "Wednesday", "Friday"].into()),
        ])),
    );

    let example_teacher = TeacherRecord::create(
        "Sarah",
        "Davis",
        true,
        "Washington",
        Some(12.0),
        Some(fields(vec![
            ("contract", true.into()),
            ("department", "Physics".into()),
            ("hasPhD", true.into()),
            ("researchArea", "Quantum Mechanics".into()),
            ("publications", 15.into()),
        ])),
    );

    writeln!(out, "--- Using Teacher Factory Function ---")?;
    write_record(out, "New Teacher 1", &new_teacher1, format)?;
    write_record(out, "New Teacher 2", &new_teacher2, format)?;
    write_record(out, "Example Teacher", &example_teacher, format)?;
    Ok(())
}

/// Validate a JSON teacher document. Errors if it is malformed or invalid.
pub fn validate(out: &mut impl Write, json: &str) -> anyhow::Result<()> {
    let document = parse_document(json).context("parsing teacher document")?;
    if !validate_teacher(&document) {
        anyhow::bail!("teacher document is invalid");
    }
    writeln!(out, "Teacher document is valid")?;
    Ok(())
}

/// Create an employee per salary and show what it does.
pub fn employees(out: &mut impl Write, salaries: &[Salary]) -> anyhow::Result<()> {
    for salary in salaries {
        let employee = create_employee(salary.clone());
        writeln!(out, "createEmployee({}): {}", salary, employee.kind())?;
        writeln!(out, "  workFromHome: {}", employee.work_from_home())?;
        writeln!(out, "  getCoffeeBreak: {}", employee.get_coffee_break())?;
        writeln!(out, "  isDirector: {}", is_director(&employee))?;
        writeln!(out, "  executeWork: {}", execute_work(&employee))?;
    }
    Ok(())
}

/// Teach each subject. Errors on the first subject outside the enumeration.
pub fn teach_classes(out: &mut impl Write, subjects: &[String]) -> anyhow::Result<()> {
    for subject in subjects {
        if !is_valid_subject(subject) {
            tracing::warn!(%subject, "Not a known subject");
        }
        let class = teach_class_str(subject).with_context(|| format!("teaching {:?}", subject))?;
        writeln!(out, "teachClass('{}'): {}", subject, class)?;
    }
    Ok(())
}

/// Every demonstration in sequence.
pub fn demo(out: &mut impl Write, format: OutputFormat) -> anyhow::Result<()> {
    writeln!(out, "=== Teacher records ===")?;
    teachers(out, format)?;
    writeln!(out, "\n=== Teacher factory ===")?;
    factory(out, format)?;
    writeln!(out, "\n=== Employees ===")?;
    let salaries = [
        Salary::from(200),
        Salary::from(1000),
        Salary::NotNumeric("not a number".to_string()),
    ];
    employees(out, &salaries)?;
    writeln!(out, "\n=== teachClass ===")?;
    teach_classes(out, &["Math".to_string(), "History".to_string()])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_teachers_text() {
        let output = capture(|out| teachers(out, OutputFormat::Text));
        assert!(output.contains("Teacher 1:\n  Name: John Smith"));
        assert!(output.contains("  Location: Boston"));
        assert!(output.contains("  newAttribute: \"This is dynamically added\""));
        assert!(output.contains("Renaming Teacher 1 rejected"));
        assert!(output.contains("Teacher3 courses: [\"Biology\",\"Chemistry\"]"));
    }

    #[test]
    fn test_teachers_json() {
        let output = capture(|out| teachers(out, OutputFormat::Json));
        assert!(output.contains(r#"Teacher 2: {"contract":false,"department":"Mathematics""#));
        assert!(output.contains(r#""salary":50000}"#));
    }

    #[test]
    fn test_factory_text() {
        let output = capture(|out| factory(out, OutputFormat::Text));
        assert!(output.contains("Name: Bob Wilson"));
        assert!(output.contains("Years of Experience: Not specified"));
        assert!(output.contains("  researchArea: \"Quantum Mechanics\""));
    }

    #[test]
    fn test_validate() {
        let valid = r#"{"firstName":"A","lastName":"B","fullTimeEmployee":true,"location":"C"}"#;
        assert_eq!(
            capture(|out| validate(out, valid)),
            "Teacher document is valid\n"
        );

        let mut out = Vec::new();
        assert!(validate(&mut out, r#"{"firstName":"A"}"#).is_err());
        assert!(validate(&mut out, "not json").is_err());
    }

    #[test]
    fn test_employees() {
        let salaries = ["499".parse().unwrap(), Salary::from(500)];
        let output = capture(|out| employees(out, &salaries));
        assert!(output.contains("createEmployee(499): Teacher"));
        assert!(output.contains("  executeWork: Getting to work"));
        assert!(output.contains("createEmployee(500): Director"));
        assert!(output.contains("  executeWork: Getting to director tasks"));
    }

    #[test]
    fn test_teach_classes() {
        let output = capture(|out| teach_classes(out, &["Math".into(), "History".into()]));
        assert_eq!(
            output,
            "teachClass('Math'): Teaching Math\nteachClass('History'): Teaching History\n"
        );

        let mut out = Vec::new();
        let err = teach_classes(&mut out, &["Science".into()]).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid subject: Science"));
    }

    #[test]
    fn test_demo_runs_everything() {
        let output = capture(|out| demo(out, OutputFormat::Text));
        assert!(output.contains("=== teachClass ==="));
        assert!(output.contains("createEmployee(\"not a number\"): Director"));
    }
}
