//! Bot command menu and the static text each command renders.

use teloxide::utils::command::BotCommands;
use teloxide::utils::html::escape;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "TRUTH-BOT commands:")]
pub enum Command {
    #[command(description = "initialize bot")]
    Start,
    #[command(description = "this menu")]
    Help,
    #[command(description = "check bot status")]
    Status,
    #[command(description = "API setup guide")]
    Setup,
}

pub fn start_text(first_name: &str, has_ai: bool) -> String {
    let ai_status = if has_ai {
        "✅ FULL AI ENABLED"
    } else {
        "⚠️ LIMITED (Add API key for full AI)"
    };

    format!(
        "🔴 <b>TRUTH-BOT v2.0 - ACTIVATED</b>\n\n\
         User: {}\n\
         Mode: NO-NONSENSE PROTOCOL\n\
         AI: {}\n\
         Status: OPERATIONAL\n\n\
         ⚠️ <b>WARNING:</b>\n\
         • I will NOT sugarcoat\n\
         • I will NOT comfort you\n\
         • I will speak BRUTAL TRUTH\n\
         • If wrong, I'll correct you\n\
         • Facts over feelings ALWAYS\n\n\
         🎯 <b>SPECIALIZATIONS:</b>\n\
         1. 📚 STUDY HELP - Practical techniques\n\
         2. 📅 PLAN MAKER - Actionable schedules\n\
         3. 💡 IDEAS - Realistic solutions\n\
         4. 🧠 THINKING - Logical analysis\n\n\
         💬 <b>ASK DIRECTLY:</b>\n\
         'How to study effectively?'\n\
         'Make a daily productivity plan'\n\
         'Business ideas with ₹5000'\n\
         'How to think differently?'\n\n\
         ⚡ /help for commands",
        escape(first_name),
        ai_status
    )
}

pub fn help_text() -> String {
    format!(
        "🛠️ <b>TRUTH-BOT COMMANDS</b>\n\n\
         📍 <b>CORE:</b>\n\
         {}\n\n\
         🎯 <b>USAGE:</b>\n\
         1. Be DIRECT in questions\n\
         2. Specify category if possible\n\
         3. Accept BRUTAL honesty\n\
         4. Expect NO emotional support\n\n\
         📌 <b>EXAMPLES:</b>\n\
         • 'Best study method for exams?'\n\
         • 'Create 6am-10pm productive schedule'\n\
         • 'Ideas for student side income'\n\
         • 'How to overcome procrastination?'\n\n\
         ⚡ <b>API REQUIRED:</b>\n\
         For ChatGPT-like responses, add Gemini/OpenAI API key.",
        escape(&Command::descriptions().to_string())
    )
}

/// `provider` labels the first configured provider and its model, if any.
pub fn status_text(provider: Option<&str>) -> String {
    let ai_status = match provider {
        Some(name) => format!("✅ {}", escape(name)),
        None => "❌ NO API KEY (Limited mode)".to_string(),
    };

    format!(
        "📊 <b>SYSTEM STATUS</b>\n\n\
         🤖 Bot: Truth-Bot v2.0\n\
         ⚡ AI: {}\n\
         🔒 Protocol: NO-SUGARCOATING\n\
         📈 Status: OPERATIONAL\n\n\
         ✅ <b>FEATURES ACTIVE:</b>\n\
         • Study Help\n\
         • Plan Maker\n\
         • Idea Generation\n\
         • Critical Thinking\n\n\
         ⚠️ <b>WARNING ACTIVE:</b>\n\
         Brutal honesty mode ENABLED",
        ai_status
    )
}

pub fn setup_text() -> &'static str {
    "🔑 <b>API SETUP GUIDE</b>\n\n\
     📌 <b>GOOGLE GEMINI (FREE):</b>\n\
     1. Go: aistudio.google.com/app/apikey\n\
     2. Login with Google\n\
     3. Click 'Get API Key'\n\
     4. Copy key\n\
     5. Set it as GEMINI_API_KEY\n\n\
     📌 <b>OPENAI GPT (PAID):</b>\n\
     1. Go: platform.openai.com/api-keys\n\
     2. Add credit\n\
     3. Generate key\n\
     4. Set it as OPENAI_API_KEY\n\n\
     ⚡ <b>DEPLOYMENT:</b>\n\
     1. Set BOT_TOKEN=your_token\n\
     2. Set GEMINI_API_KEY and/or OPENAI_API_KEY (optional)\n\
     3. Restart the bot\n\n\
     ✅ Bot auto-detects API keys."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", "truthbot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/status@truthbot", "truthbot").unwrap(), Command::Status);
        assert!(Command::parse("/unknown", "truthbot").is_err());
    }

    #[test]
    fn test_start_text_ai_status() {
        assert!(start_text("Asha", true).contains("FULL AI ENABLED"));
        assert!(start_text("Asha", false).contains("LIMITED"));
    }

    #[test]
    fn test_start_text_escapes_name() {
        let text = start_text("<b>x</b>", false);
        assert!(text.contains("&lt;b&gt;x&lt;/b&gt;"));
    }

    #[test]
    fn test_help_lists_commands() {
        let text = help_text();
        for cmd in ["/start", "/help", "/status", "/setup"] {
            assert!(text.contains(cmd), "missing {cmd}");
        }
    }

    #[test]
    fn test_status_text() {
        assert!(status_text(Some("OpenAI gpt-3.5-turbo")).contains("✅ OpenAI gpt-3.5-turbo"));
        assert!(status_text(Some("Gemini gemini-pro")).contains("✅ Gemini gemini-pro"));
        assert!(status_text(None).contains("NO API KEY"));
    }

    #[test]
    fn test_setup_mentions_env_vars() {
        let text = setup_text();
        assert!(text.contains("BOT_TOKEN"));
        assert!(text.contains("GEMINI_API_KEY"));
        assert!(text.contains("OPENAI_API_KEY"));
    }
}
