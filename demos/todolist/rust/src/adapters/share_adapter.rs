// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{
    controllers::TaskListController, models::ShareRequest, repositories::traits::TaskRepository,
};

pub fn connect<R: TaskRepository>(controller: &TaskListController<R>, target: ShareTarget) {
    controller.on_share(move |request| target.share(request));
}

/// The host platform's way of passing text on to another app.
#[cfg(not(target_os = "android"))]
#[derive(Clone, Default)]
pub struct ShareTarget;

#[cfg(target_os = "android")]
#[derive(Clone)]
pub struct ShareTarget(slint::android::AndroidApp);

#[cfg(not(target_os = "android"))]
impl ShareTarget {
    /// Hands the text to the desktop's mail client, the closest thing to a
    /// share sheet that every desktop has.
    pub fn share(&self, request: &ShareRequest) {
        let url = mailto_url(request);
        log::info!("Sharing {:?}", request.text);

        if let Err(e) = open::that_detached(&url) {
            log::warn!("Failed to hand {} to the platform: {}", url, e);
        }
    }
}

#[cfg(target_os = "android")]
impl ShareTarget {
    pub fn new(app: slint::android::AndroidApp) -> Self {
        Self(app)
    }

    /// Opens the system chooser with an `ACTION_SEND` intent.
    pub fn share(&self, request: &ShareRequest) {
        log::info!("Sharing {:?} ({})", request.text, request.mime_type);

        if let Err(e) = start_chooser(&self.0, request) {
            log::warn!("Failed to open the share sheet: {}", e);
            if matches!(e, jni::errors::Error::JavaException) {
                clear_exception(&self.0);
            }
        }
    }
}

#[cfg(target_os = "android")]
fn start_chooser(
    app: &slint::android::AndroidApp,
    request: &ShareRequest,
) -> Result<(), jni::errors::Error> {
    use jni::objects::{JObject, JValue};

    const INTENT: &str = "android/content/Intent";

    // Safety: as documented in android-activity to obtain a jni::JavaVM
    let vm = unsafe { jni::JavaVM::from_raw(app.vm_as_ptr() as *mut _) }?;
    let activity = unsafe { JObject::from_raw(app.activity_as_ptr() as *mut _) };
    let mut env = vm.attach_current_thread()?;

    let action = env.get_static_field(INTENT, "ACTION_SEND", "Ljava/lang/String;")?.l()?;
    let extra_text = env.get_static_field(INTENT, "EXTRA_TEXT", "Ljava/lang/String;")?.l()?;

    let intent = env.new_object(INTENT, "(Ljava/lang/String;)V", &[JValue::Object(&action)])?;
    let text = env.new_string(&request.text)?;
    env.call_method(
        &intent,
        "putExtra",
        "(Ljava/lang/String;Ljava/lang/String;)Landroid/content/Intent;",
        &[JValue::Object(&extra_text), JValue::Object(&text)],
    )?;
    let mime_type = env.new_string(request.mime_type)?;
    env.call_method(
        &intent,
        "setType",
        "(Ljava/lang/String;)Landroid/content/Intent;",
        &[JValue::Object(&mime_type)],
    )?;

    let chooser = env
        .call_static_method(
            INTENT,
            "createChooser",
            "(Landroid/content/Intent;Ljava/lang/CharSequence;)Landroid/content/Intent;",
            &[JValue::Object(&intent), JValue::Object(&JObject::null())],
        )?
        .l()?;
    env.call_method(
        &activity,
        "startActivity",
        "(Landroid/content/Intent;)V",
        &[JValue::Object(&chooser)],
    )?;

    Ok(())
}

// a pending Java exception would abort the next JNI call made by the backend
#[cfg(target_os = "android")]
fn clear_exception(app: &slint::android::AndroidApp) {
    let Ok(vm) = (unsafe { jni::JavaVM::from_raw(app.vm_as_ptr() as *mut _) }) else {
        return;
    };
    if let Ok(env) = vm.attach_current_thread() {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
}

#[cfg_attr(target_os = "android", allow(dead_code))]
fn mailto_url(request: &ShareRequest) -> String {
    format!("mailto:?body={}", utf8_percent_encode(&request.text, NON_ALPHANUMERIC))
}
