//! HTML bodies for the two outgoing emails.
//!
//! Pure string rendering, no side effects. All user-supplied fields are
//! escaped before interpolation.

use super::model::ContactForm;

pub const SUPPORT_EMAIL: &str = "info@finaccoutsourcings.com";
pub const SUPPORT_PHONE: &str = "+91 7011701023";

/// Escape a string for use in HTML content.
fn escape_html(s: &str) -> String {
  s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Branded confirmation sent to the submitter.
pub fn confirmation_html(first_name: &str) -> String {
  format!(
    r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Thank You for Contacting Finacc Outsourcing</title>
</head>
<body style="margin:0;padding:0;font-family:Inter,Arial,sans-serif;background:#f5f5f5;">
<table width="100%" cellpadding="0" cellspacing="0" style="padding:40px 20px;">
<tr><td align="center">
<table width="600" style="background:#ffffff;border-radius:12px;overflow:hidden;">
<tr>
<td style="background:#1E90FF;padding:40px;text-align:center;color:#fff;">
<h1>Finacc Outsourcing</h1>
</td>
</tr>
<tr>
<td style="padding:40px;">
<h2>Thank You, {name}!</h2>
<p>We've received your message and will get back to you within <b>24 hours</b>.</p>
<p>
Email: {support_email}<br/>
Phone: {support_phone}
</p>
</td>
</tr>
</table>
</td></tr>
</table>
</body>
</html>
"#,
    name = escape_html(first_name),
    support_email = SUPPORT_EMAIL,
    support_phone = SUPPORT_PHONE,
  )
}

/// Internal summary of a submission. Phone and company lines render only when
/// the submitter provided them.
pub fn notification_html(form: &ContactForm) -> String {
  let phone_row = match form.phone.as_deref().filter(|p| !p.is_empty()) {
    Some(phone) => format!("<p><b>Phone:</b> {}</p>\n", escape_html(phone)),
    None => String::new(),
  };
  let company_row = match form.company.as_deref().filter(|c| !c.is_empty()) {
    Some(company) => format!("<p><b>Company:</b> {}</p>\n", escape_html(company)),
    None => String::new(),
  };

  format!(
    r#"<!DOCTYPE html>
<html>
<body style="font-family:Arial;background:#f5f5f5;padding:20px;">
<div style="max-width:600px;margin:auto;background:#fff;padding:30px;border-radius:8px;">
<h2>New Contact Form Submission</h2>
<p><b>Name:</b> {first_name} {last_name}</p>
<p><b>Email:</b> {email}</p>
{phone_row}{company_row}<p><b>Message:</b></p>
<p>{message}</p>
</div>
</body>
</html>
"#,
    first_name = escape_html(&form.first_name),
    last_name = escape_html(&form.last_name),
    email = escape_html(&form.email),
    phone_row = phone_row,
    company_row = company_row,
    message = escape_html(&form.message),
  )
}
