use std::path::PathBuf;

use summary_store::SummaryStore;

use crate::{
    yt::{AudioHandler, MetadataFetcher},
    Summarizer, Transcriber, VideoSummaryProcessor,
};

pub struct VideoSummaryProcessorBuilder<M = (), A = (), T = (), S = (), D = ()> {
    workdir: PathBuf,
    metadata_fetcher: M,
    audio_handler: A,
    transcriber: T,
    summarizer: S,
    store: D,
}

impl VideoSummaryProcessorBuilder {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            metadata_fetcher: (),
            audio_handler: (),
            transcriber: (),
            summarizer: (),
            store: (),
        }
    }
}

impl<M, A, T, S, D> VideoSummaryProcessorBuilder<M, A, T, S, D> {
    pub fn metadata_fetcher<M2: MetadataFetcher + Send + Sync + 'static>(
        self,
        metadata_fetcher: M2,
    ) -> VideoSummaryProcessorBuilder<M2, A, T, S, D> {
        VideoSummaryProcessorBuilder {
            workdir: self.workdir,
            metadata_fetcher,
            audio_handler: self.audio_handler,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            store: self.store,
        }
    }

    pub fn audio_handler<A2: AudioHandler + Send + Sync + 'static>(
        self,
        audio_handler: A2,
    ) -> VideoSummaryProcessorBuilder<M, A2, T, S, D> {
        VideoSummaryProcessorBuilder {
            workdir: self.workdir,
            metadata_fetcher: self.metadata_fetcher,
            audio_handler,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            store: self.store,
        }
    }

    pub fn transcriber<T2: Transcriber + Send + Sync + 'static>(
        self,
        transcriber: T2,
    ) -> VideoSummaryProcessorBuilder<M, A, T2, S, D> {
        VideoSummaryProcessorBuilder {
            workdir: self.workdir,
            metadata_fetcher: self.metadata_fetcher,
            audio_handler: self.audio_handler,
            transcriber,
            summarizer: self.summarizer,
            store: self.store,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> VideoSummaryProcessorBuilder<M, A, T, S2, D> {
        VideoSummaryProcessorBuilder {
            workdir: self.workdir,
            metadata_fetcher: self.metadata_fetcher,
            audio_handler: self.audio_handler,
            transcriber: self.transcriber,
            summarizer,
            store: self.store,
        }
    }

    pub fn store<D2: SummaryStore + Send + Sync + 'static>(
        self,
        store: D2,
    ) -> VideoSummaryProcessorBuilder<M, A, T, S, D2> {
        VideoSummaryProcessorBuilder {
            workdir: self.workdir,
            metadata_fetcher: self.metadata_fetcher,
            audio_handler: self.audio_handler,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            store,
        }
    }
}

impl<M, A, T, S, D> VideoSummaryProcessorBuilder<M, A, T, S, D>
where
    M: MetadataFetcher + Send + Sync + 'static,
    A: AudioHandler + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    D: SummaryStore + Send + Sync + 'static,
{
    pub fn build(self) -> VideoSummaryProcessor<M, A, T, S, D> {
        VideoSummaryProcessor {
            workdir: self.workdir,
            metadata_fetcher: self.metadata_fetcher,
            audio_handler: self.audio_handler,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            store: self.store,
        }
    }
}
