use crate::{AppState, Effect, LoadResult, Msg, UserMessage};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ViewStarted { connected } | Msg::RefreshRequested { connected } => {
            restart_pipeline(&mut state, connected)
        }
        Msg::SettingsChanged {
            settings,
            connected,
        } => {
            if &settings == state.settings() {
                return (state, Vec::new());
            }
            state.set_settings(settings.clone());
            let mut effects = vec![Effect::PersistSettings(settings)];
            effects.extend(restart_pipeline(&mut state, connected));
            effects
        }
        Msg::FetchFinished { run_id, result } => {
            let articles = match result {
                LoadResult::Articles(articles) => articles,
                LoadResult::NoResults | LoadResult::Failed => Vec::new(),
            };
            // A stale run leaves state untouched.
            state.apply_result(run_id, articles);
            Vec::new()
        }
        Msg::ArticleActivated { index } => match state.articles().get(index) {
            Some(article) => vec![Effect::OpenUrl {
                url: article.url().to_string(),
            }],
            None => Vec::new(),
        },
        Msg::BrowserUnavailable => {
            state.show_message(UserMessage::NoBrowser);
            Vec::new()
        }
        Msg::Teardown => cancel_effect(state.tear_down()),
    };

    (state, effects)
}

/// Connectivity is checked before Loading; without it the pipeline never starts.
fn restart_pipeline(state: &mut AppState, connected: bool) -> Vec<Effect> {
    if !connected {
        return cancel_effect(state.show_offline());
    }

    let (run_id, superseded) = state.begin_run();
    let mut effects = cancel_effect(superseded);
    effects.push(Effect::StartFetch {
        run_id,
        settings: state.settings().clone(),
    });
    effects
}

fn cancel_effect(run: Option<crate::RunId>) -> Vec<Effect> {
    run.map(|run_id| vec![Effect::CancelFetch { run_id }])
        .unwrap_or_default()
}
