//! Response construction: the `Responder` terminal operations and the
//! `Speechlet` they produce.
//!
//! Each terminal operation consumes the `Responder` by value, so a handler
//! cannot respond twice, and a handler must return the resulting `Speechlet`,
//! so it cannot silently respond never. The dispatcher turns the returned
//! speechlet into the wire envelope and delivers it.

use voxskill_types::response::{
    Card, OutputSpeech, Reprompt, ResponseBody, ResponseEnvelope, WIRE_VERSION,
};
use voxskill_types::session::Session;

/// One-shot response emitter handed to each hook or intent handler.
///
/// Exactly one terminal operation can be called per instance; the dispatcher
/// creates one per invocation.
#[derive(Debug)]
pub struct Responder(());

impl Responder {
    pub fn new() -> Self {
        Responder(())
    }

    /// Final spoken answer. Ends the session; no reprompt, no card.
    pub fn tell(self, speech: OutputSpeech) -> Speechlet {
        Speechlet {
            output_speech: speech,
            card: None,
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Final spoken answer with a companion-app card. The card is attached
    /// only when both title and content are non-empty.
    pub fn tell_with_card(
        self,
        speech: OutputSpeech,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Speechlet {
        Speechlet {
            output_speech: speech,
            card: Card::simple(title, content),
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Question that keeps the session open, replaying `reprompt` if the
    /// user stays silent.
    pub fn ask(self, speech: OutputSpeech, reprompt: Reprompt) -> Speechlet {
        Speechlet {
            output_speech: speech,
            card: None,
            reprompt: Some(reprompt),
            should_end_session: false,
        }
    }

    /// Question with a companion-app card. Same card rule as
    /// [`Responder::tell_with_card`].
    pub fn ask_with_card(
        self,
        speech: OutputSpeech,
        reprompt: Reprompt,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Speechlet {
        Speechlet {
            output_speech: speech,
            card: Card::simple(title, content),
            reprompt: Some(reprompt),
            should_end_session: false,
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

/// An assembled response body, not yet bound to a session.
///
/// Produced only by a [`Responder`] terminal operation, which is what keeps
/// the one-speech / end-session invariants enforced in one place.
#[derive(Debug)]
pub struct Speechlet {
    output_speech: OutputSpeech,
    card: Option<Card>,
    reprompt: Option<Reprompt>,
    should_end_session: bool,
}

impl Speechlet {
    /// Bind the response to its session, echoing the session's attributes
    /// verbatim (including any mutation the handler made before returning).
    pub fn into_envelope(self, session: &Session) -> ResponseEnvelope {
        ResponseEnvelope {
            version: WIRE_VERSION.to_string(),
            session_attributes: session.attributes.clone(),
            response: ResponseBody {
                output_speech: self.output_speech,
                card: self.card,
                reprompt: self.reprompt,
                should_end_session: self.should_end_session,
            },
        }
    }
}
