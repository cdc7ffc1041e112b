#![forbid(unsafe_code)]

//! The profile form screen: renderers, conditional notification section and
//! the JSON preview of the last accepted submission.

use std::cell::{Cell, RefCell};
use std::fmt::Write as _;
use std::rc::Rc;

use fform_fields::{
    CheckboxField, CheckboxGroupField, Choices, FieldView, InfoField, InfoStyle, RadioGroupField,
    Range, SelectField, SliderField, SwitchField, TextField,
};
use fform_runtime::{FormApi, FormConfig, FormOptions, Logger, SubmitError, VisibilityObserver};

use crate::prefs::Preferences;
use crate::profile::{
    AGREE_TO_TERMS, BIO, COUNTRY, DONATION_AMOUNT, EMAIL, ENABLE_EMAIL_NOTIFICATIONS, FULL_NAME,
    NOTIFICATION_FREQUENCY, NOTIFICATION_TYPES, NotificationType, PROFILE_COLOR,
    PROFILE_VISIBILITY, ProfileValues, ProfileVisibility, country_options,
    notification_type_options, validate_profile, visibility_options,
};

type Profile = ProfileValues;

/// One row of the form: a control and its validation line.
struct Row {
    control: Box<dyn FieldView>,
    info: InfoField<Profile>,
}

impl Row {
    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "  {}", self.control.render());
        let info = self.info.render();
        if !info.is_empty() {
            let _ = writeln!(out, "    ! {info}");
        }
    }
}

/// One entry of the screen layout.
enum Slot {
    Row(Row),
    /// The notification settings, shown only while email notifications
    /// are enabled.
    NotificationSection,
}

/// The controls the scripted session drives directly.
pub struct Controls {
    pub full_name: TextField<Profile>,
    pub email: TextField<Profile>,
    pub country: SelectField<Profile, String>,
    pub visibility: RadioGroupField<Profile, ProfileVisibility>,
    pub bio: TextField<Profile>,
    pub profile_color: TextField<Profile>,
    pub notifications: SwitchField<Profile>,
    pub notification_types: CheckboxGroupField<Profile, NotificationType>,
    pub frequency: SliderField<Profile, u32>,
    pub donation: TextField<Profile>,
    pub agree: CheckboxField<Profile>,
}

/// The example profile form with its preview pane.
pub struct ProfileApp {
    form: FormApi<Profile>,
    controls: Controls,
    layout: Vec<Slot>,
    notification_rows: Vec<Row>,
    section: VisibilityObserver,
    section_toggles: Rc<Cell<u32>>,
    output: Rc<RefCell<Option<String>>>,
    logger: Logger,
    prefs: Preferences,
}

impl ProfileApp {
    #[must_use]
    pub fn new(config: &FormConfig, logger: Logger, prefs: Preferences) -> Self {
        let output = Rc::new(RefCell::new(None));
        let out = Rc::clone(&output);
        let submit_log = logger.child("submit");
        let invalid_log = logger.child("submit");
        let options = FormOptions::new()
            .validator(validate_profile)
            .validate_on(config.triggers())
            .logger(logger.child("form"))
            .on_submit(move |values: &Profile| match serde_json::to_string_pretty(values) {
                Ok(json) => *out.borrow_mut() = Some(json),
                Err(e) => submit_log.error(format_args!("cannot render preview: {e}")),
            })
            .on_submit_invalid(move |errors| {
                invalid_log.warn(format_args!(
                    "Form submission failed. Please check the errors. ({errors})"
                ));
            });
        let form = FormApi::new(Profile::default(), options);

        let style = InfoStyle {
            separator: config.error_separator.clone(),
            validating_label: config.validating_label.clone(),
        };

        let controls = Controls {
            full_name: TextField::new(form.field(FULL_NAME), "Full Name"),
            email: TextField::new(form.field(EMAIL), "Email").placeholder("you@example.com"),
            country: SelectField::new(form.field(COUNTRY), "Country", Choices::new(country_options()))
                .placeholder("Select a country")
                .clearable(true),
            visibility: RadioGroupField::new(
                form.field(PROFILE_VISIBILITY),
                "Profile Visibility",
                Choices::new(visibility_options()),
            ),
            bio: TextField::new(form.field(BIO), "Bio"),
            profile_color: TextField::new(form.field(PROFILE_COLOR), "Profile Color"),
            notifications: SwitchField::new(
                form.field(ENABLE_EMAIL_NOTIFICATIONS),
                "Enable Email Notifications",
            ),
            notification_types: CheckboxGroupField::new(
                form.field(NOTIFICATION_TYPES),
                "Notification Types",
                Choices::new(notification_type_options()),
            ),
            frequency: SliderField::new(
                form.field(NOTIFICATION_FREQUENCY),
                "Notification Frequency",
                Range::new(1.0, 30.0, 1.0),
            ),
            donation: TextField::new(form.field(DONATION_AMOUNT), "Donation Amount"),
            agree: CheckboxField::new(form.field(AGREE_TO_TERMS), "I agree to the terms and conditions"),
        };

        let c = &controls;
        let layout = vec![
            Slot::Row(row(
                c.full_name.clone(),
                InfoField::new(c.full_name.handle(), style.clone()),
            )),
            Slot::Row(row(
                c.email.clone(),
                InfoField::new(c.email.handle(), style.clone()),
            )),
            Slot::Row(row(
                c.country.clone(),
                InfoField::new(c.country.handle(), style.clone()),
            )),
            Slot::Row(row(
                c.visibility.clone(),
                InfoField::new(c.visibility.handle(), style.clone()),
            )),
            Slot::Row(row(c.bio.clone(), InfoField::new(c.bio.handle(), style.clone()))),
            Slot::Row(row(
                c.profile_color.clone(),
                InfoField::new(c.profile_color.handle(), style.clone()),
            )),
            Slot::Row(row(
                c.notifications.clone(),
                InfoField::new(c.notifications.handle(), style.clone()),
            )),
            Slot::NotificationSection,
            Slot::Row(row(
                c.donation.clone(),
                InfoField::new(c.donation.handle(), style.clone()),
            )),
            Slot::Row(row(
                c.agree.clone(),
                InfoField::new(c.agree.handle(), style.clone()),
            )),
        ];
        let notification_rows = vec![
            row(
                c.notification_types.clone(),
                InfoField::new(c.notification_types.handle(), style.clone()),
            ),
            row(
                c.frequency.clone(),
                InfoField::new(c.frequency.handle(), style),
            ),
        ];

        let section_toggles = Rc::new(Cell::new(0));
        let (shows, hides) = (Rc::clone(&section_toggles), Rc::clone(&section_toggles));
        let (show_log, hide_log) = (logger.child("section"), logger.child("section"));
        let mut section = VisibilityObserver::new()
            .on_show(move || {
                shows.set(shows.get() + 1);
                show_log.debug("notification settings shown");
            })
            .on_hide(move || {
                hides.set(hides.get() + 1);
                hide_log.debug("notification settings hidden");
            });
        section.observe(&form, |s| s.values.enable_email_notifications, |on| *on);

        Self {
            form,
            controls,
            layout,
            notification_rows,
            section,
            section_toggles,
            output,
            logger,
            prefs,
        }
    }

    #[must_use]
    pub fn form(&self) -> &FormApi<Profile> {
        &self.form
    }

    #[must_use]
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    #[must_use]
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// Whether the notification settings are on screen.
    #[must_use]
    pub fn notifications_shown(&self) -> bool {
        self.section.is_shown()
    }

    /// How many times the notification section appeared or disappeared.
    #[must_use]
    pub fn section_toggles(&self) -> u32 {
        self.section_toggles.get()
    }

    /// Pretty JSON of the last accepted submission.
    #[must_use]
    pub fn output(&self) -> Option<String> {
        self.output.borrow().clone()
    }

    /// Submit; an accepted form is reset to its defaults afterwards.
    pub fn submit(&self) -> Result<ProfileValues, SubmitError> {
        let values = self.form.handle_submit()?;
        self.form.reset();
        self.logger.info("Form submitted successfully!");
        Ok(values)
    }

    /// Reset without submitting.
    pub fn reset(&self) {
        self.form.reset();
    }

    /// The whole screen as text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Form Example  [theme: {}  language: {}]",
            self.prefs.theme.value(),
            self.prefs.language.value()
        );
        for slot in &self.layout {
            match slot {
                Slot::Row(row) => row.render(&mut out),
                Slot::NotificationSection if self.section.is_shown() => {
                    for nested in &self.notification_rows {
                        nested.render(&mut out);
                    }
                }
                Slot::NotificationSection => {}
            }
        }
        let state = self.form.state();
        let submit = if state.can_submit() { "[ Submit ]" } else { "[ Submit (fix errors) ]" };
        let _ = write!(out, "  {submit}");
        if state.is_dirty() {
            let _ = write!(out, "  [ Reset ]");
        }
        out.push('\n');
        match self.output.borrow().as_deref() {
            Some(json) => {
                let _ = writeln!(out, "Result:\n{json}");
            }
            None => out.push_str("Submit the form to see the result here\n"),
        }
        out
    }
}

fn row(control: impl FieldView + 'static, info: InfoField<Profile>) -> Row {
    Row {
        control: Box::new(control),
        info,
    }
}
