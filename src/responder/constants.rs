/// Status page, `{{status}}` is replaced with the probe outcome text
pub const STATUS_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta http-equiv="content-type" content="text/html; charset=UTF-8">
    <title></title>
  </head>
  <body>
    <p>{{status}}</p>
  </body>
</html>
"#;

pub const STATUS_PLACEHOLDER: &str = "{{status}}";

pub const STATUS_CONTENT_TYPE: &str = "text/html; charset=UTF-8";
