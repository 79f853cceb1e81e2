//! Front-desk client commands.
//!
//! Every mutation is followed by a fresh fetch of the tab it affects.

use crate::cli::args::{
    AppointmentsAction, AppointmentsArgs, CredentialsArgs, DashboardArgs, QueueAction, QueueArgs,
};
use crate::client::dashboard::{self, render_doctors};
use crate::client::forms::{
    check, check_reschedule, AppointmentForm, LoginForm, PatientForm, RescheduleForm, SignupForm,
    StatusForm,
};
use crate::client::{FrontDeskClient, Session, SessionStore, Tab};
use crate::errors::AppResult;

/// Logged-in client plus the email to greet
async fn authorized(api_url: &str, store: &SessionStore) -> AppResult<(FrontDeskClient, String)> {
    let session = store.require().await?;
    let client = FrontDeskClient::new(api_url)?.with_token(session.access_token);
    Ok((client, session.email))
}

pub async fn signup(args: CredentialsArgs, api_url: &str) -> AppResult<()> {
    let form = SignupForm {
        email: args.email,
        password: args.password,
    };
    check(&form)?;

    let user = FrontDeskClient::new(api_url)?.signup(&form).await?;
    println!("Account created for {}. Run `frontdesk login` to sign in.", user.email);
    Ok(())
}

pub async fn login(args: CredentialsArgs, api_url: &str, store: &SessionStore) -> AppResult<()> {
    let form = LoginForm {
        email: args.email,
        password: args.password,
    };
    check(&form)?;

    let token = FrontDeskClient::new(api_url)?.signin(&form).await?;
    store
        .save(&Session {
            email: form.email.clone(),
            access_token: token.access_token,
        })
        .await?;

    println!("Signed in as {}.", form.email);
    Ok(())
}

pub async fn logout(store: &SessionStore) -> AppResult<()> {
    if store.clear().await? {
        println!("Signed out.");
    } else {
        println!("Not signed in.");
    }
    Ok(())
}

pub async fn dashboard(args: DashboardArgs, api_url: &str, store: &SessionStore) -> AppResult<()> {
    let (client, viewer) = authorized(api_url, store).await?;

    if args.once {
        dashboard::show(&client, args.tab, &viewer).await
    } else {
        dashboard::watch(&client, args.tab, &viewer).await
    }
}

pub async fn queue(args: QueueArgs, api_url: &str, store: &SessionStore) -> AppResult<()> {
    let (client, viewer) = authorized(api_url, store).await?;

    match args.action {
        QueueAction::Add { name, priority } => {
            let form = PatientForm { name, priority };
            check(&form)?;
            let patient = client.add_patient(&form).await?;
            println!("Queued {} as {}.", patient.name, patient.queue_number);
        }
        QueueAction::Status { id, status, doctor } => {
            let form = StatusForm {
                status,
                attending_doctor_id: doctor,
            };
            let patient = client.update_patient_status(id, &form).await?;
            println!("{} is now {}.", patient.name, patient.status);
        }
    }

    dashboard::show(&client, Tab::Queue, &viewer).await
}

pub async fn appointments(
    args: AppointmentsArgs,
    api_url: &str,
    store: &SessionStore,
) -> AppResult<()> {
    let (client, viewer) = authorized(api_url, store).await?;

    match args.action {
        AppointmentsAction::Add {
            patient_name,
            reason,
            time,
            doctor,
        } => {
            let form = AppointmentForm {
                patient_name,
                reason,
                time,
                doctor_id: doctor,
            };
            check(&form)?;
            let appointment = client.book_appointment(&form).await?;
            println!(
                "Booked appointment {} for {}.",
                appointment.id, appointment.patient_name
            );
        }
        AppointmentsAction::Reschedule {
            id,
            patient_name,
            reason,
            time,
            doctor,
        } => {
            let form = RescheduleForm {
                patient_name,
                reason,
                time,
                doctor_id: doctor,
            };
            check_reschedule(&form)?;
            client.reschedule_appointment(id, &form).await?;
            println!("Appointment {} updated.", id);
        }
        AppointmentsAction::Cancel { id } => {
            client.cancel_appointment(id).await?;
            println!("Appointment {} canceled.", id);
        }
    }

    dashboard::show(&client, Tab::Appointments, &viewer).await
}

pub async fn doctors(api_url: &str, store: &SessionStore) -> AppResult<()> {
    let (client, _) = authorized(api_url, store).await?;
    print!("{}", render_doctors(&client.doctors().await?));
    Ok(())
}
