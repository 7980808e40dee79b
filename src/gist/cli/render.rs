use colored::Colorize;
use gist::api::{CmdMessage, MessageLevel};

const LICENSE_NOTICE: &str = "\
gist is released under the MIT license.

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", format_message(message));
    }
}

fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
    }
}

pub(super) fn print_license() {
    println!("{}", LICENSE_NOTICE);
}
