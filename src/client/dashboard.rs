//! Terminal dashboard: overview, appointment list and patient queue.

use std::fmt::{Display, Write};
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use clap::ValueEnum;

use super::FrontDeskClient;
use crate::config::DASHBOARD_POLL_SECONDS;
use crate::domain::{Appointment, Doctor, Patient, PatientStatus};
use crate::errors::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Tab {
    #[default]
    Overview,
    Appointments,
    Queue,
}

/// Everything one refresh pulls from the API
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub appointments: Vec<Appointment>,
}

impl Snapshot {
    /// Fetch the three collections concurrently
    pub async fn fetch(client: &FrontDeskClient) -> AppResult<Self> {
        let (patients, doctors, appointments) =
            tokio::try_join!(client.patients(), client.doctors(), client.appointments())?;

        Ok(Self {
            patients,
            doctors,
            appointments,
        })
    }

    fn count_status(&self, status: PatientStatus) -> usize {
        self.patients.iter().filter(|p| p.status == status).count()
    }
}

/// Render one tab as seen at `now`; times are shown in `now`'s zone.
pub fn render<Tz>(tab: Tab, snapshot: &Snapshot, viewer: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tab {
        Tab::Overview => render_overview(snapshot, viewer, now),
        Tab::Appointments => render_appointments(&snapshot.appointments, &now.timezone()),
        Tab::Queue => render_queue(&snapshot.patients, &now.timezone()),
    }
}

fn render_overview<Tz>(snapshot: &Snapshot, viewer: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    let _ = writeln!(out, "Welcome, {}!", viewer);
    let _ = writeln!(out, "Today is {}.", now.format("%A, %B %-d, %Y"));
    let _ = writeln!(out);

    // "Appointments Today" counts every appointment, not just today's.
    let cards = [
        ("Patients in queue", snapshot.count_status(PatientStatus::Waiting)),
        ("Patients with Doctor", snapshot.count_status(PatientStatus::WithDoctor)),
        ("Appointments Today", snapshot.appointments.len()),
    ];
    for (title, value) in cards {
        let _ = writeln!(out, "  {:<22}{:>5}", title, value);
    }
    out
}

fn render_appointments<Tz>(appointments: &[Appointment], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::from("Upcoming Appointments\n");
    let rows = appointments
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.patient_name.clone(),
                a.time.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string(),
                a.status.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    out.push_str(&table(&["ID", "Patient Name", "Date/Time", "Status"], &rows));
    out
}

fn render_queue<Tz>(patients: &[Patient], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (completed, active): (Vec<&Patient>, Vec<&Patient>) = patients
        .iter()
        .partition(|p| p.status == PatientStatus::Completed);

    let mut out = String::from("Active Queue\n");
    out.push_str(&patient_table(&active, tz));

    if !completed.is_empty() {
        out.push_str("\nCompleted Today\n");
        out.push_str(&patient_table(&completed, tz));
    }
    out
}

fn patient_table<Tz>(patients: &[&Patient], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let rows = patients
        .iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.queue_number.clone(),
                p.name.clone(),
                p.arrival.with_timezone(tz).format("%I:%M %p").to_string(),
                p.priority.to_string(),
                p.status.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    table(
        &["ID", "Queue No", "Patient", "Arrival Time", "Priority", "Status"],
        &rows,
    )
}

pub fn render_doctors(doctors: &[Doctor]) -> String {
    let rows = doctors
        .iter()
        .map(|d| vec![d.id.to_string(), d.name.clone(), d.specialization.clone()])
        .collect::<Vec<_>>();
    table(&["ID", "Name", "Specialization"], &rows)
}

/// Left-aligned plain-text table, two spaces between columns
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = table_line(headers.iter().copied(), &widths);
    out.push_str(&table_line(rule.iter().map(String::as_str), &widths));
    if rows.is_empty() {
        out.push_str("(none)\n");
    }
    for row in rows {
        out.push_str(&table_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

/// Fetch once and print the tab
pub async fn show(client: &FrontDeskClient, tab: Tab, viewer: &str) -> AppResult<()> {
    let snapshot = Snapshot::fetch(client).await?;
    print!("{}", render(tab, &snapshot, viewer, &Local::now()));
    Ok(())
}

/// Print the tab, then refresh it every poll interval until Ctrl-C.
///
/// Only the first fetch can fail the command; later failures are logged
/// and the previous view stays on screen.
pub async fn watch(client: &FrontDeskClient, tab: Tab, viewer: &str) -> AppResult<()> {
    show(client, tab, viewer).await?;

    let mut ticker = tokio::time::interval(Duration::from_secs(DASHBOARD_POLL_SECONDS));
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Dashboard stopped");
                return Ok(());
            }
            _ = ticker.tick() => match Snapshot::fetch(client).await {
                Ok(snapshot) => {
                    println!();
                    print!("{}", render(tab, &snapshot, viewer, &Local::now()));
                }
                Err(e) => tracing::warn!("Dashboard refresh failed: {}", e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppointmentStatus, PatientPriority};
    use chrono::Utc;

    fn patient(id: i32, name: &str, status: PatientStatus) -> Patient {
        Patient {
            id,
            name: name.into(),
            queue_number: format!("A{}", 100 + id),
            arrival: Utc.with_ymd_and_hms(2024, 5, 1, 8, 5 * id as u32, 0).unwrap(),
            status,
            priority: PatientPriority::Normal,
            attending_doctor_id: None,
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            patients: vec![
                patient(1, "Ann", PatientStatus::Waiting),
                patient(2, "Ben", PatientStatus::WithDoctor),
                patient(3, "Cid", PatientStatus::Waiting),
            ],
            doctors: vec![],
            appointments: vec![Appointment {
                id: 7,
                patient_id: "P12".into(),
                patient_name: "John Roe".into(),
                reason: "Checkup".into(),
                time: Utc.with_ymd_and_hms(2024, 6, 2, 14, 0, 0).unwrap(),
                status: AppointmentStatus::Canceled,
                doctor_id: 1,
            }],
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_overview_counts() {
        let out = render(Tab::Overview, &snapshot(), "desk@clinic.example", &now());

        assert!(out.starts_with("Welcome, desk@clinic.example!\n"));
        assert!(out.contains("Today is Wednesday, May 1, 2024."));
        assert!(out.contains("Patients in queue         2"));
        assert!(out.contains("Patients with Doctor      1"));
        assert!(out.contains("Appointments Today        1"));
    }

    #[test]
    fn test_appointments_table_keeps_canceled_rows() {
        let out = render(Tab::Appointments, &snapshot(), "x", &now());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[1], "ID  Patient Name  Date/Time         Status");
        assert_eq!(lines[3], "7   John Roe      2024-06-02 14:00  Canceled");
    }

    #[test]
    fn test_queue_hides_completed_section_when_empty() {
        let out = render(Tab::Queue, &snapshot(), "x", &now());
        assert!(out.contains("Active Queue"));
        assert!(out.contains("A101"));
        assert!(out.contains("08:05 AM"));
        assert!(!out.contains("Completed Today"));
    }

    #[test]
    fn test_queue_splits_completed_patients() {
        let mut snap = snapshot();
        snap.patients[1].status = PatientStatus::Completed;

        let out = render(Tab::Queue, &snap, "x", &now());
        let (active, completed) = out.split_once("Completed Today").unwrap();
        assert!(active.contains("Ann") && active.contains("Cid"));
        assert!(!active.contains("Ben"));
        assert!(completed.contains("Ben"));
    }

    #[test]
    fn test_empty_table_says_none() {
        let out = render_doctors(&[]);
        assert_eq!(out, "ID  Name  Specialization\n--  ----  --------------\n(none)\n");
    }
}
