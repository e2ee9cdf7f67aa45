use crate::admin::{ClusterAdmin, TopicPartition};
use crate::connection_settings::ConnectionSettings;
use crate::consumer::ConsumerWrapper;
use anyhow::{anyhow, Context};
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use rdkafka::{Offset, TopicPartitionList};
use std::collections::BTreeMap;
use std::ops::Deref;
use std::sync::Mutex;
use std::time::Duration;
use tracing::trace;

const GROUP_LIST_TIMEOUT: Duration = Duration::from_secs(5);
const METADATA_TIMEOUT: Duration = Duration::from_secs(5);
const COMMITTED_OFFSETS_TIMEOUT: Duration = Duration::from_secs(15);

/// [`ClusterAdmin`] backed by librdkafka.
///
/// The cluster partition list is fetched once per wrapper and reused for every group.
pub struct AdminWrapper {
    connection_settings: ConnectionSettings,
    client: ConsumerWrapper,
    partitions: PartitionsCache,
}

impl AdminWrapper {
    pub fn create(connection_settings: &ConnectionSettings) -> Result<Self, anyhow::Error> {
        let client = ConsumerWrapper::create_for_non_consuming(connection_settings, None)
            .context("While creating admin client")?;

        Ok(Self {
            connection_settings: connection_settings.clone(),
            client,
            partitions: PartitionsCache::default(),
        })
    }

    fn all_partitions(&self) -> Result<TopicPartitionList, anyhow::Error> {
        self.partitions.get_or_fetch(|| self.fetch_all_partitions())
    }

    fn fetch_all_partitions(&self) -> Result<TopicPartitionList, anyhow::Error> {
        let metadata = self
            .client
            .fetch_metadata(None, Timeout::After(METADATA_TIMEOUT))
            .context("While fetching cluster metadata")?;

        trace!("Got metadata for {} topics", metadata.topics().len());

        let mut tpl = TopicPartitionList::new();
        for topic in metadata.topics() {
            for partition in topic.partitions() {
                tpl.add_partition(topic.name(), partition.id());
            }
        }

        Ok(tpl)
    }
}

impl ClusterAdmin for AdminWrapper {
    fn list_consumer_groups(&self) -> Result<Vec<String>, anyhow::Error> {
        let groups_list = self
            .client
            .fetch_group_list(None, Timeout::After(GROUP_LIST_TIMEOUT))
            .context("While fetching groups")?;

        Ok(groups_list
            .groups()
            .iter()
            .map(|x| x.name().to_owned())
            .collect())
    }

    fn list_consumer_group_offsets(
        &self,
        group_id: &str,
    ) -> Result<BTreeMap<TopicPartition, i64>, anyhow::Error> {
        let tpl = self
            .all_partitions()
            .with_context(|| format!("While listing partitions for group {}", group_id))?;

        let group_consumer =
            ConsumerWrapper::create_for_non_consuming(&self.connection_settings, Some(group_id))
                .with_context(|| format!("While creating consumer for group {}", group_id))?;

        let committed = group_consumer
            .committed_offsets(tpl, Timeout::After(COMMITTED_OFFSETS_TIMEOUT))
            .with_context(|| format!("While fetching committed offsets of group {}", group_id))?;

        Ok(committed_offsets_map(&committed))
    }
}

impl Deref for AdminWrapper {
    type Target = ConsumerWrapper;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

/// Keeps only concrete committed offsets. Partitions the group never committed
/// come back as `Offset::Invalid` and are left out.
fn committed_offsets_map(tpl: &TopicPartitionList) -> BTreeMap<TopicPartition, i64> {
    tpl.elements()
        .iter()
        .filter_map(|x| match x.offset() {
            Offset::Offset(offset) => {
                Some((TopicPartition::new(x.topic(), x.partition()), offset))
            }
            _ => None,
        })
        .collect()
}

#[derive(Default)]
struct PartitionsCache {
    partitions: Mutex<Option<TopicPartitionList>>,
}

impl PartitionsCache {
    fn get_or_fetch<F>(&self, fetch: F) -> Result<TopicPartitionList, anyhow::Error>
    where
        F: FnOnce() -> Result<TopicPartitionList, anyhow::Error>,
    {
        let mut guard = self
            .partitions
            .lock()
            .map_err(|_| anyhow!("Partitions cache lock is poisoned"))?;

        if let Some(tpl) = guard.as_ref() {
            return Ok(tpl.clone());
        }

        let tpl = fetch()?;
        *guard = Some(tpl.clone());
        Ok(tpl)
    }
}
