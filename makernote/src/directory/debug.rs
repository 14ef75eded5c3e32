use makernote_common::{Tag, Value};

impl super::Directory {
    /// Tag name with the fallback used in reports
    pub fn tag_label(&self, tag: Tag) -> String {
        self.tag_name(tag)
            .map(ToString::to_string)
            .unwrap_or_else(|| format!("Unknown tag ({tag})"))
    }

    /// One line per stored tag, in the order the tags were set
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("{self}\n"));
        out.push_str("------------------------------\n");

        for (tag, value) in self.store().iter() {
            let description = self
                .description(tag)
                .unwrap_or_else(|| format!("{} (unable to formulate description)", raw(value)));

            out.push_str(&format!(
                "[{}] {} - {description}\n",
                self.name(),
                self.tag_label(tag)
            ));
        }

        for error in self.errors() {
            out.push_str(&format!("[{}] Error - {error}\n", self.name()));
        }

        out
    }
}

fn raw(value: &Value) -> String {
    match value {
        Value::Bytes(bytes) => hex::encode(bytes),
        value => value.to_string(),
    }
}
